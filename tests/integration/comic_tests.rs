use crate::fixtures::{comic_page, config_for, with_client, ABOUT_PAGE};
use chrono::NaiveDate;
use gocomics::{GoComicsError, Segment};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_dated_comic() {
    let server = MockServer::start().await;
    let image = format!("{}/images/peanuts.png", server.uri());

    Mock::given(method("GET"))
        .and(path("/peanuts/2000/02/13"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(comic_page(&image))
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let fields = with_client(config, |client| {
        let comic = client.comic("peanuts", NaiveDate::from_ymd_opt(2000, 2, 13))?;
        Ok::<_, GoComicsError>(
            [
                Some(comic.url()),
                comic.name(),
                comic.author(),
                comic.followers_count(),
                comic.header_feature_url(),
                comic.image_url(),
            ]
            .map(|field| field.map(str::to_string)),
        )
    })
    .await
    .expect("Failed to fetch comic");

    assert_eq!(
        fields,
        [
            Some(format!("{}/peanuts/2000/02/13", server.uri())),
            Some("Peanuts".to_string()),
            Some("Charles Schulz".to_string()),
            Some("1.2M".to_string()),
            Some("https://cdn.example.com/peanuts-banner.jpg".to_string()),
            Some(image),
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_redirect_resolves_to_dated_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/peanuts"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/peanuts/2000/02/13"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/peanuts/2000/02/13"))
        .respond_with(ResponseTemplate::new(200).set_body_string(comic_page("/i.png")))
        .mount(&server)
        .await;

    let resolved = with_client(config_for(&server), |client| {
        client
            .comic("peanuts", None)
            .map(|comic| comic.url().to_string())
    })
    .await
    .expect("Failed to fetch comic");

    assert_eq!(resolved, format!("{}/peanuts/2000/02/13", server.uri()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_user_agent_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/peanuts"))
        .and(header("user-agent", "ComicBot/0.9 (+https://example.com/bot)"))
        .respond_with(ResponseTemplate::new(200).set_body_string(comic_page("/i.png")))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.user_agent.client_name = "ComicBot".to_string();
    config.user_agent.client_version = "0.9".to_string();
    config.user_agent.contact_url = Some("https://example.com/bot".to_string());

    let result = with_client(config, |client| client.comic("peanuts", None).map(|_| ())).await;
    assert!(result.is_ok(), "unexpected error: {:?}", result.err());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_comic_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = with_client(config_for(&server), |client| {
        client.comic("notarealcomic1234567890", None).map(|_| ())
    })
    .await;

    match result {
        Err(GoComicsError::NotFound { identifier, date }) => {
            assert_eq!(identifier, "notarealcomic1234567890");
            assert_eq!(date, None);
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_is_fetch_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result =
        with_client(config_for(&server), |client| client.comic("peanuts", None).map(|_| ())).await;
    assert!(matches!(result, Err(GoComicsError::Fetch { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unhydrated_page_is_refetched() {
    let server = MockServer::start().await;

    // retry count 2: the construction fetch plus one re-fetch
    Mock::given(method("GET"))
        .and(path("/peanuts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .expect(2)
        .mount(&server)
        .await;

    let image = with_client(config_for(&server), |client| {
        client
            .comic("peanuts", None)
            .map(|comic| comic.image_url().map(str::to_string))
    })
    .await
    .expect("Failed to fetch comic");
    assert_eq!(image, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_download_image() {
    let server = MockServer::start().await;
    let image = format!("{}/images/peanuts.png", server.uri());

    Mock::given(method("GET"))
        .and(path("/peanuts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(comic_page(&image)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/images/peanuts.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"\x89PNG\r\n".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let target = dir.path().to_path_buf();

    let saved = with_client(config_for(&server), move |client| {
        let comic = client.comic("peanuts", None)?;
        comic.download(Some("strip.png"), Some(target.as_path()))
    })
    .await
    .expect("Failed to download");

    assert_eq!(saved, dir.path().join("strip.png"));
    assert_eq!(std::fs::read(&saved).unwrap(), b"\x89PNG\r\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_about_page_fetched_per_group() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/peanuts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(comic_page("/i.png")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/peanuts/about"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ABOUT_PAGE))
        .expect(2)
        .mount(&server)
        .await;

    let (about, cast) = with_client(config_for(&server), |client| {
        let mut comic = client.comic("peanuts", None)?;
        let about = comic.about()?.to_vec();
        comic.about()?;
        let cast = comic.characters()?.to_vec();
        Ok::<_, GoComicsError>((about, cast))
    })
    .await
    .expect("Failed to read about page");

    assert_eq!(about.len(), 3);
    assert!(matches!(&about[1], Segment::Link(link) if link.text == "Charlie Brown"));
    assert_eq!(cast.len(), 1);
    assert_eq!(cast[0].name, "Snoopy");
}
