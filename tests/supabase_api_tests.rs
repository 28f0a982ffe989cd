use gymevents::config::env_loader::load_config;
use gymevents::config::model::SupabaseConfig;
use gymevents::sample::sample_events;
use gymevents::supabase::api::SupabaseAPI;
use gymevents::supabase::loader::{fetch_events, load_events, DataLoad};

fn unreachable_config() -> SupabaseConfig {
    SupabaseConfig {
        url: "http://127.0.0.1:9".to_string(),
        anon_key: "anon".to_string(),
        max_retries: 0,
    }
}

#[test_log::test(tokio::test)]
async fn when_database_is_unreachable_should_fall_back_to_sample_events() {
    let load = load_events(Ok(&unreachable_config())).await;

    assert!(matches!(load, DataLoad::QueryError { .. }));
    assert_eq!(load.into_events(), sample_events());
}

#[test_log::test(tokio::test)]
async fn when_database_is_unreachable_connection_test_should_fail() {
    let api = SupabaseAPI::new(&unreachable_config());

    assert!(api.test_connection().await.is_err());
}

#[test_log::test(tokio::test)]
#[ignore = "needs SUPABASE_URL and SUPABASE_ANON_KEY"]
async fn should_read_live_events_and_catalog() {
    let config = load_config().unwrap();
    let api = SupabaseAPI::new(&config.supabase);

    api.test_connection().await.unwrap();

    let load = fetch_events(&api).await;
    assert!(!matches!(load, DataLoad::QueryError { .. }));

    let gyms = api.get_gyms().await.unwrap();
    assert!(!gyms.is_empty());

    let event_types = api.get_event_types().await.unwrap();
    assert!(event_types.iter().any(|event_type| event_type.is_required));
}
