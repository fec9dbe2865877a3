use std::collections::HashMap;

use reqwest::Url;
use subcli::{
    Error,
    subsonic::{StreamUrlBuilder, SubsonicClient},
    types::Credentials,
};

fn client(url: &str) -> subcli::Result<SubsonicClient> {
    SubsonicClient::new(Credentials {
        url: url.to_string(),
        username: "alice".to_string(),
        password: "sesame".to_string(),
    })
}

fn query(url: &str) -> (Url, HashMap<String, String>) {
    let url = Url::parse(url).unwrap();
    let params = url.query_pairs().into_owned().collect();
    (url, params)
}

#[test]
fn test_stream_url_carries_token_auth() {
    let client = client("https://music.example.com/").unwrap();
    let (url, params) = query(&client.stream_url("tr-42"));

    assert_eq!(url.path(), "/rest/stream.view");
    assert_eq!(params["id"], "tr-42");
    assert_eq!(params["u"], "alice");
    assert_eq!(params["v"], "1.16.1");
    assert_eq!(params["c"], "subcli");

    let salt = &params["s"];
    assert_eq!(salt.len(), 12);
    assert_eq!(params["t"], format!("{:x}", md5::compute(format!("sesame{salt}"))));

    // the password itself never appears
    assert!(!url.as_str().contains("sesame"));
}

#[test]
fn test_stream_url_keeps_base_path() {
    let client = client("http://host:4533/navidrome").unwrap();
    let (url, _) = query(&client.stream_url("1"));
    assert_eq!(url.path(), "/navidrome/rest/stream.view");
    assert_eq!(url.port(), Some(4533));
}

#[test]
fn test_new_salt_per_url() {
    let client = client("http://host").unwrap();
    let (_, a) = query(&client.stream_url("1"));
    let (_, b) = query(&client.stream_url("1"));
    assert_ne!(a["s"], b["s"]);
}

#[test]
fn test_invalid_server_url() {
    assert!(matches!(client("not a url"), Err(Error::Connection(_))));
    assert!(matches!(client("ftp://host"), Err(Error::Connection(_))));
}
