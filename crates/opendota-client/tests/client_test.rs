//! OpenDota client against a local mockito server: paths, decoding, and status mapping.

use opendota_client::{OpenDotaClient, RequestError};

const PLAYER: u64 = 86745912;

async fn serve(path: &str, status: usize, body: &str) -> (mockito::ServerGuard, mockito::Mock) {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;
    (server, mock)
}

#[tokio::test]
async fn test_heroes_decodes_list() {
    let (server, mock) = serve(
        "/heroes",
        200,
        r#"[{"id":1,"name":"npc_dota_hero_antimage","localized_name":"Anti-Mage"},
            {"id":74,"name":"npc_dota_hero_invoker","localized_name":"Invoker"}]"#,
    )
    .await;

    let heroes = OpenDotaClient::new(server.url()).heroes().await.unwrap();

    mock.assert_async().await;
    assert_eq!(heroes.len(), 2);
    assert_eq!(heroes[1].id, 74);
    assert_eq!(heroes[1].localized_name, "Invoker");
}

#[tokio::test]
async fn test_items_skips_entries_without_id() {
    let (server, _mock) = serve(
        "/constants/items",
        200,
        r#"{
            "blink": {"id": 1, "dname": "Blink Dagger", "cost": 2250},
            "recipe_x": {"id": 999},
            "broken": "not an object",
            "no_id": {"dname": "Ghost"}
        }"#,
    )
    .await;

    let items = OpenDotaClient::new(server.url()).items().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items["blink"].id, 1);
    assert_eq!(items["blink"].dname.as_deref(), Some("Blink Dagger"));
    assert_eq!(items["recipe_x"].dname, None);
}

#[tokio::test]
async fn test_player_summary_with_missing_fields() {
    let (server, _mock) = serve(
        &format!("/players/{}", PLAYER),
        200,
        r#"{"profile": {"personaname": "Miracle-"}, "mmr_estimate": {}}"#,
    )
    .await;

    let summary = OpenDotaClient::new(server.url()).player(PLAYER).await.unwrap();

    let profile = summary.profile.unwrap();
    assert_eq!(profile.personaname.as_deref(), Some("Miracle-"));
    assert!(profile.profileurl.is_none());
    assert!(summary.mmr_estimate.unwrap().estimate.is_none());
}

#[tokio::test]
async fn test_recent_matches_path_and_order() {
    let (server, mock) = serve(
        &format!("/players/{}/recentMatches", PLAYER),
        200,
        r#"[{"match_id": 30, "hero_id": 1, "player_slot": 0, "radiant_win": true, "duration": 1800},
            {"match_id": 20, "hero_id": 2, "player_slot": 130, "radiant_win": true, "duration": 2400}]"#,
    )
    .await;

    let matches = OpenDotaClient::new(server.url())
        .recent_matches(PLAYER)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        matches.iter().map(|m| m.match_id).collect::<Vec<_>>(),
        vec![30, 20]
    );
    assert_eq!(matches[1].player_slot, Some(130));
}

#[tokio::test]
async fn test_non_success_status_maps_to_status_error() {
    let (server, _mock) = serve(&format!("/players/{}/wl", PLAYER), 500, "{}").await;

    let err = OpenDotaClient::new(server.url())
        .win_loss(PLAYER)
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::Status(code) if code.as_u16() == 500));
}

#[tokio::test]
async fn test_malformed_body_maps_to_decode_error_with_content() {
    let (server, _mock) = serve("/matches/7", 200, "<html>maintenance</html>").await;

    let err = OpenDotaClient::new(server.url())
        .match_details(7)
        .await
        .unwrap_err();

    match err {
        RequestError::Decode(_, content) => assert!(content.contains("maintenance")),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_ignored() {
    let (server, mock) = serve(
        &format!("/players/{}/peers", PLAYER),
        200,
        r#"[{"account_id": 1, "personaname": "Puppey", "with_games": 10, "with_win": 6}]"#,
    )
    .await;

    let client = OpenDotaClient::new(format!("{}/", server.url()));
    let peers = client.peers(PLAYER).await.unwrap();

    mock.assert_async().await;
    assert_eq!(peers[0].with_win, 6);
}
