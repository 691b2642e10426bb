use crate::helpers::TestApp;

#[actix_web::test]
pub async fn graphiql_console_is_served_on_get(){
    let app = TestApp::spawn_app().await;

    let response = reqwest::get(format!("{}/graphql", app.get_app_url()))
                    .await
                    .expect("Failed to get response");

    assert_eq!(response.status().as_u16(), 200);

    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response.text().await.expect("Failed to read response body");
    assert!(body.to_lowercase().contains("graphiql"));
}
