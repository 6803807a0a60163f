use actix_http::StatusCode;
use actix_web::test;
use event_api_lib::TracedError;

mod base;

#[derive(Debug, PartialEq, serde::Deserialize)]
struct InfoResponse {
    service_name: String,
    api_version: String,
}

#[tokio::test]
async fn info() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let app = base::get_app(db).await;

        let req = test::TestRequest::get().uri("/info").to_request();

        let res = test::call_service(&app, req).await;
        let status = res.status();
        let body = test::read_body(res).await;
        let body = base::try_from_slice::<InfoResponse>(&body)?;

        assert_eq!(status, 200);
        assert_eq!(
            body,
            InfoResponse {
                service_name: "Event Planner API".to_owned(),
                api_version: env!("CARGO_PKG_VERSION").to_owned(),
            }
        );

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn unknown_route() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let app = base::get_app(db).await;

        let req = test::TestRequest::get().uri("/there_is_nothing_here").to_request();

        let res = test::try_call_service(&app, req).await;
        let err = res.err().expect("Request should return error");
        let traced_err = err
            .as_error::<TracedError>()
            .expect("Returned error should be a traced error");
        assert_eq!(traced_err.status_code, Some(StatusCode::NOT_FOUND));
        // Endpoint not found
        assert_eq!(traced_err.r#type, Some(301));

        anyhow::Ok(())
    })
    .await
}
