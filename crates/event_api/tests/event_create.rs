use actix_http::StatusCode;
use actix_web::test;
use entity::{event, event_guest, guest};
use event_api_lib::TracedError;
use sea_orm::{ActiveValue::Set, EntityTrait, QueryOrder};

mod base;

#[derive(serde::Serialize)]
struct Request {
    name: String,
    datetime: String,
    location: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct MessageResponse {
    message: String,
}

#[tokio::test]
async fn create_event_invites_every_guest() -> anyhow::Result<()> {
    let guests = (1..=2).map(|guest_id| guest::ActiveModel {
        id: Set(guest_id),
        name: Set(format!("guest{guest_id}")),
    });

    base::with_db(async |db| {
        guest::Entity::insert_many(guests).exec(&db.sql_conn).await?;

        let app = base::get_app(db.clone()).await;

        let req = test::TestRequest::post()
            .uri("/event")
            .set_json(Request {
                name: "Launch".to_owned(),
                datetime: "2024-01-01 10:00:00".to_owned(),
                location: Some("HQ".to_owned()),
            })
            .to_request();

        let res = test::call_service(&app, req).await;
        let status = res.status();
        let body = test::read_body(res).await;
        base::try_from_slice::<MessageResponse>(&body)?;

        assert_eq!(status, 201);

        let events = event::Entity::find().all(&db.sql_conn).await?;
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.name, "Launch");
        assert_eq!(event.datetime, "2024-01-01 10:00:00");
        assert_eq!(event.location.as_deref(), Some("HQ"));

        let invites = event_guest::Entity::find()
            .order_by_asc(event_guest::Column::GuestId)
            .all(&db.sql_conn)
            .await?;

        itertools::assert_equal(
            invites,
            [1, 2].map(|guest_id| event_guest::Model {
                event_id: event.id,
                guest_id,
                is_going: 0,
            }),
        );

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn create_event_without_guests() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let app = base::get_app(db.clone()).await;

        let req = test::TestRequest::post()
            .uri("/event")
            .set_json(Request {
                name: "Launch".to_owned(),
                datetime: "2024-01-01 10:00:00".to_owned(),
                location: None,
            })
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 201);

        let events = event::Entity::find().all(&db.sql_conn).await?;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].location, None);

        let invite_count = event_guest::Entity::find().all(&db.sql_conn).await?.len();
        assert_eq!(invite_count, 0);

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn create_event_invalid_datetime() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let app = base::get_app(db.clone()).await;

        for datetime in ["2024-01-01", "01/01/2024 10:00:00", "2024-1-1 10:00:00"] {
            let req = test::TestRequest::post()
                .uri("/event")
                .set_json(Request {
                    name: "Launch".to_owned(),
                    datetime: datetime.to_owned(),
                    location: None,
                })
                .to_request();

            let res = test::try_call_service(&app, req).await;
            let err = res.err().expect("Request should return error");
            let traced_err = err
                .as_error::<TracedError>()
                .expect("Returned error should be a traced error");
            assert_eq!(traced_err.status_code, Some(StatusCode::BAD_REQUEST));
            // Invalid datetime
            assert_eq!(traced_err.r#type, Some(306));
        }

        // The request was rejected before any insert.
        let event_count = event::Entity::find().all(&db.sql_conn).await?.len();
        assert_eq!(event_count, 0);

        anyhow::Ok(())
    })
    .await
}
