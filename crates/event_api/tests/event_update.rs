use actix_http::StatusCode;
use actix_web::test;
use entity::{event, event_guest, guest};
use event_api_lib::TracedError;
use sea_orm::{ActiveValue::Set, EntityTrait};

mod base;

fn seed_event() -> event::ActiveModel {
    event::ActiveModel {
        id: Set(1),
        name: Set("event_name".to_owned()),
        datetime: Set("2024-01-01 10:00:00".to_owned()),
        location: Set(Some("event_location".to_owned())),
    }
}

#[tokio::test]
async fn update_event_name_only() -> anyhow::Result<()> {
    let guest = guest::ActiveModel {
        id: Set(1),
        name: Set("guest".to_owned()),
    };

    let invite = event_guest::ActiveModel {
        event_id: Set(1),
        guest_id: Set(1),
        is_going: Set(1),
    };

    base::with_db(async |db| {
        event::Entity::insert(seed_event()).exec(&db.sql_conn).await?;
        guest::Entity::insert(guest).exec(&db.sql_conn).await?;
        event_guest::Entity::insert(invite).exec(&db.sql_conn).await?;

        let app = base::get_app(db.clone()).await;

        let req = test::TestRequest::patch()
            .uri("/event/1?name=new_name")
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);

        let event = event::Entity::find_by_id(1)
            .one(&db.sql_conn)
            .await?
            .unwrap_or_else(|| panic!("Event should exist in database"));

        assert_eq!(event.name, "new_name");
        assert_eq!(event.datetime, "2024-01-01 10:00:00");
        assert_eq!(event.location.as_deref(), Some("event_location"));

        // The association rows are left untouched.
        let invite = event_guest::Entity::find_by_id((1, 1))
            .one(&db.sql_conn)
            .await?
            .unwrap_or_else(|| panic!("Invitation should exist in database"));
        assert_eq!(invite.is_going, 1);

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn update_event_several_fields() -> anyhow::Result<()> {
    base::with_db(async |db| {
        event::Entity::insert(seed_event()).exec(&db.sql_conn).await?;

        let app = base::get_app(db.clone()).await;

        let req = test::TestRequest::patch()
            .uri("/event/1?name=new_name&datetime=2025-06-15%2018:30:00&location=new_location")
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);

        let event = event::Entity::find_by_id(1)
            .one(&db.sql_conn)
            .await?
            .unwrap_or_else(|| panic!("Event should exist in database"));

        assert_eq!(event.name, "new_name");
        assert_eq!(event.datetime, "2025-06-15 18:30:00");
        assert_eq!(event.location.as_deref(), Some("new_location"));

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn update_event_invalid_datetime() -> anyhow::Result<()> {
    base::with_db(async |db| {
        event::Entity::insert(seed_event()).exec(&db.sql_conn).await?;

        let app = base::get_app(db.clone()).await;

        let req = test::TestRequest::patch()
            .uri("/event/1?datetime=tomorrow")
            .to_request();

        let res = test::try_call_service(&app, req).await;
        let err = res.err().expect("Request should return error");
        let traced_err = err
            .as_error::<TracedError>()
            .expect("Returned error should be a traced error");
        assert_eq!(traced_err.status_code, Some(StatusCode::BAD_REQUEST));
        // Invalid datetime
        assert_eq!(traced_err.r#type, Some(306));

        let event = event::Entity::find_by_id(1)
            .one(&db.sql_conn)
            .await?
            .unwrap_or_else(|| panic!("Event should exist in database"));
        assert_eq!(event.datetime, "2024-01-01 10:00:00");

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn update_unknown_event() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let app = base::get_app(db).await;

        let req = test::TestRequest::patch()
            .uri("/event/42?name=new_name")
            .to_request();

        let res = test::try_call_service(&app, req).await;
        let err = res.err().expect("Request should return error");
        let traced_err = err
            .as_error::<TracedError>()
            .expect("Returned error should be a traced error");
        assert_eq!(traced_err.status_code, Some(StatusCode::NOT_FOUND));
        // Event not found
        assert_eq!(traced_err.r#type, Some(302));

        anyhow::Ok(())
    })
    .await
}
