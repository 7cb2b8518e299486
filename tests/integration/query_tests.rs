use crate::fixtures::{comic_page, config_for, with_client};
use chrono::NaiveDate;
use gocomics::config::load_config;
use gocomics::{Category, ComicList, GoComicsError, PoliticalCategory, SearchOptions};
use std::io::Write;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn listing(class: &str, hrefs: &[&str]) -> String {
    let links: String = hrefs
        .iter()
        .map(|href| format!(r#"<a class="{class}" href="{href}">x</a>"#))
        .collect();
    format!("<html><body>{links}</body></html>")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_sends_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/comics/a-to-z"))
        .and(query_param("lastUpdated", "today"))
        .and(query_param("category", "webcomics,kids"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing(
            "ComicsAtoZ_comics__link__IyrQd",
            &["/adamathome", "/garfield/"],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let identifiers = with_client(config_for(&server), |client| {
        let options = SearchOptions::default()
            .updated_today()
            .category(Category::Webcomics)
            .category(Category::Kids);
        client.search(&options)
    })
    .await
    .expect("Search failed");

    assert_eq!(identifiers, vec!["adamathome", "garfield"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_political_search() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/political-cartoons/political-a-to-z"))
        .and(query_param("category", "left"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing(
            "ComicsAtoZ_comics__link__IyrQd",
            &["/clayjones"],
        )))
        .mount(&server)
        .await;

    let identifiers = with_client(config_for(&server), |client| {
        client.search_political(&SearchOptions::default().category(PoliticalCategory::Left))
    })
    .await
    .expect("Search failed");

    assert_eq!(identifiers, vec!["clayjones"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_popular_comics() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/comics/popular"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing(
            "BadgeByline_badgeByline__link__uZaRR",
            &["/calvinandhobbes", "/pearlsbeforeswine"],
        )))
        .mount(&server)
        .await;

    let identifiers = with_client(config_for(&server), |client| client.popular_comics(false))
        .await
        .expect("Popular lookup failed");

    assert_eq!(identifiers, vec!["calvinandhobbes", "pearlsbeforeswine"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_published_dates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/calendar/garfield/2024/02"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"["2024/02/01","2024/02/29","bogus"]"#)
                .insert_header("content-type", "application/json"),
        )
        .mount(&server)
        .await;

    let dates = with_client(config_for(&server), |client| {
        client.published_dates("garfield", 2024, 2)
    })
    .await
    .expect("Calendar lookup failed");

    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_comic_list() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/comics/lists/42"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body>
            <div class="content-section-sm"><div data-url="{base}/peanuts/2000/02/13"></div></div>
            <div class="content-section-sm"><div data-url="{base}/peanuts/2000/02/13"></div></div>
            </body></html>"#
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/comics/lists/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body>
            <h2 class="h1">Sunday Classics</h2>
            <span class="h3">By The Editors</span>
            <time itemprop="datePublished">January 7, 2018</time>
            <input class="js-copy-link form-control" value="{base}/comics/lists/42/sunday-classics">
            </body></html>"#
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/peanuts/2000/02/13"))
        .respond_with(ResponseTemplate::new(200).set_body_string(comic_page("/i.png")))
        .mount(&server)
        .await;

    let (title, author, date, identifier, comics) = with_client(config_for(&server), |client| {
        let mut list = ComicList::with_pages(&client, 42, 3)?;
        let comics: Vec<String> = list.comics()?.iter().map(|c| c.url().to_string()).collect();
        Ok::<_, GoComicsError>((
            list.title().map(str::to_string),
            list.author().map(str::to_string),
            list.date(),
            list.identifier().map(str::to_string),
            comics,
        ))
    })
    .await
    .expect("List lookup failed");

    assert_eq!(title.as_deref(), Some("Sunday Classics"));
    assert_eq!(author.as_deref(), Some("The Editors"));
    assert_eq!(date, NaiveDate::from_ymd_opt(2018, 1, 7));
    assert_eq!(identifier.as_deref(), Some("sunday-classics"));
    assert_eq!(comics, vec![format!("{base}/peanuts/2000/02/13")]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_stream_continues_past_missing_day() {
    let server = MockServer::start().await;

    for day in ["/peanuts/2000/02/12", "/peanuts/2000/02/14"] {
        Mock::given(method("GET"))
            .and(path(day))
            .respond_with(ResponseTemplate::new(200).set_body_string(comic_page("/i.png")))
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/peanuts/2000/02/13"))
        .respond_with(ResponseTemplate::new(410))
        .mount(&server)
        .await;

    let outcomes = with_client(config_for(&server), |client| {
        let start = NaiveDate::from_ymd_opt(2000, 2, 12).unwrap();
        let end = NaiveDate::from_ymd_opt(2000, 2, 14).unwrap();
        client
            .stream("peanuts", start, end)
            .map(|result| match result {
                Ok(comic) => Ok(comic.date()),
                Err(GoComicsError::NotFound { date, .. }) => Err(date),
                Err(other) => panic!("unexpected error: {other}"),
            })
            .collect::<Vec<_>>()
    })
    .await;

    assert_eq!(
        outcomes,
        vec![
            Ok(NaiveDate::from_ymd_opt(2000, 2, 12)),
            Err(NaiveDate::from_ymd_opt(2000, 2, 13)),
            Ok(NaiveDate::from_ymd_opt(2000, 2, 14)),
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_config_file_drives_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/comics/popular"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing(
            "BadgeByline_badgeByline__link__uZaRR",
            &["/garfield"],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(
        file,
        r#"
[client]
base-url = "{}"
retry-count = 3

[user-agent]
client-name = "IntegrationBot"
"#,
        server.uri()
    )
    .expect("Failed to write config");

    let config = load_config(file.path()).expect("Failed to load config");
    assert!(config.client.base_url.ends_with('/'));
    assert_eq!(config.client.retry_count, 3);

    let identifiers = with_client(config, |client| client.popular_comics(false))
        .await
        .expect("Popular lookup failed");
    assert_eq!(identifiers, vec!["garfield"]);
}
