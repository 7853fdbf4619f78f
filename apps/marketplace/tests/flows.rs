//! End-to-end screen flows over a fully wired AppState.

use std::time::Duration;

use barberhub_auth::{AccountProfile, ProviderResponse};
use barberhub_core::forms::{BarberForm, JobForm, ShopForm};
use barberhub_core::views::{JobTypeFilter, MyListingsTab, RegionFilter};
use barberhub_core::{JobType, Region};
use barberhub_marketplace::commands::{barbers, jobs, profile, session, shops};
use barberhub_marketplace::config::{AppConfig, SessionBackendKind};
use barberhub_marketplace::error::Alert;
use barberhub_marketplace::routes::Route;
use barberhub_marketplace::screens::{
    BarbersScreen, DetailScreen, HomeScreen, JobsScreen, ProfileScreen, ShopsScreen,
};
use barberhub_marketplace::state::AppState;
use tokio::time::Instant;

fn app() -> AppState {
    let mut config = AppConfig::default();
    config.session.backend = SessionBackendKind::Memory;
    AppState::from_config(&config).unwrap()
}

fn test_cuts() -> JobForm {
    JobForm {
        shop_name: "Test Cuts".into(),
        location: "London, Soho".into(),
        salary_text: "£12/hour".into(),
        phone: "+447000000000".into(),
        ..JobForm::default()
    }
}

#[tokio::test(start_paused = true)]
async fn post_job_updates_mounted_feed() {
    let state = app();
    let mut feed = JobsScreen::mount(&state.market, false);
    feed.set_region(RegionFilter::Only(Region::London));
    feed.set_job_type(JobTypeFilter::Only(JobType::FullTime));
    assert_eq!(feed.visible().len(), 1);

    let started = Instant::now();
    let alert = jobs::post_job(&state.market, &state.ui, &test_cuts(), None)
        .await
        .unwrap();
    assert!(started.elapsed() >= Duration::from_millis(800));
    assert_eq!(alert, Alert::new("Posted", "Test Cuts • full time"));

    let visible = feed.visible();
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].shop_name, "Test Cuts");

    let home = HomeScreen::mount(&state.market);
    assert_eq!(home.featured_job(), Route::job(visible[0].id.clone()));
}

#[tokio::test(start_paused = true)]
async fn own_listings_round_trip_through_profile() {
    let state = app();
    let mut me = ProfileScreen::mount(&state.market);
    let mut shops_feed = ShopsScreen::mount(&state.market, false);
    let barber_feed = BarbersScreen::mount(&state.market, false);

    jobs::post_job(&state.market, &state.ui, &test_cuts(), None)
        .await
        .unwrap();

    let mut shop = ShopForm {
        name: "Fade Factory".into(),
        location: "Edinburgh, Leith".into(),
        description: "Busy corner shop with loyal clients.".into(),
        phone: "+44 7000 000002".into(),
        ..ShopForm::default()
    };
    shop.set_price_input("60000");
    let alert = shops::list_shop(&state.market, &state.ui, &shop, None)
        .await
        .unwrap();
    assert_eq!(alert.message, "Fade Factory • £60,000");

    let barber = BarberForm {
        name: "Priya Patel".into(),
        city: Some(Region::Manchester),
        phone: "07123456789".into(),
        ..BarberForm::default()
    };
    barbers::add_barber(&state.market, &barber, None).unwrap();

    let mine = me.my_listings();
    assert_eq!(mine.count(MyListingsTab::Jobs), 1);
    assert_eq!(mine.count(MyListingsTab::Shops), 1);
    assert_eq!(mine.count(MyListingsTab::Barbers), 1);

    shops_feed.set_region(RegionFilter::Only(Region::Edinburgh));
    assert_eq!(shops_feed.visible().len(), 1);
    assert_eq!(barber_feed.visible().len(), 4);

    me.select_tab(MyListingsTab::Shops);
    assert!(me.delete(&mine.shops[0].id));
    assert!(shops_feed.visible().is_empty());
    assert_eq!(me.tab_label(MyListingsTab::Shops), "Shops (0)");
}

#[tokio::test]
async fn detail_screen_sees_edits() {
    let state = app();
    let detail = DetailScreen::mount(&state.market.jobs, "2");

    let mut form = JobForm::from_listing(&detail.current().unwrap());
    form.phone = "+44 161 000 0000".into();
    jobs::post_job(&state.market, &barberhub_marketplace::config::UiConfig::instant(), &form, Some("2"))
        .await
        .unwrap();

    assert_eq!(detail.dial().unwrap(), "tel:+441610000000");
}

#[tokio::test]
async fn welcome_sign_in_and_sign_out() {
    let state = app();
    assert_eq!(session::initial_route(&state.session).await, Route::Welcome);

    state.auth.provider().register(
        "id-token",
        AccountProfile {
            email: "sam@barbers.co.uk".into(),
            display_name: Some("Sam Reid".into()),
            photo_url: None,
        },
    );
    let home = HomeScreen::mount(&state.market);
    session::sign_in(
        &state.auth,
        &state.session,
        &state.market,
        &ProviderResponse::success("id-token"),
    )
    .await
    .unwrap();

    assert_eq!(home.greeting(), "Hi, Sam Reid");
    assert_eq!(session::initial_route(&state.session).await, Route::Home);

    let route = profile::sign_out(&state.session, &state.auth).await.unwrap();
    assert_eq!(route, Route::Welcome);
    assert_eq!(session::initial_route(&state.session).await, Route::Welcome);
}

#[tokio::test]
async fn session_flag_survives_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.session.backend = SessionBackendKind::File;
    config.session.path = Some(dir.path().join("session.json"));

    let first = AppState::from_config(&config).unwrap();
    assert_eq!(session::enter(&first.session).await, Route::Home);

    let second = AppState::from_config(&config).unwrap();
    assert_eq!(session::initial_route(&second.session).await, Route::Home);
}

#[test]
fn unmounted_screens_stop_listening() {
    let state = app();
    {
        let _jobs = JobsScreen::mount(&state.market, true);
        let _profile = ProfileScreen::mount(&state.market);
        assert_eq!(state.market.jobs.listener_count(), 2);
        assert_eq!(state.market.user.listener_count(), 1);
    }
    assert_eq!(state.market.jobs.listener_count(), 0);
    assert_eq!(state.market.user.listener_count(), 0);
}
