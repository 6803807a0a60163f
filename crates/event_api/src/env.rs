use mkenv::{error::ConfigInitError, prelude::*};
use once_cell::sync::OnceCell;
use planner_lib::DbEnv;

#[cfg(debug_assertions)]
mkenv::make_config! {
    pub struct Hostname {}
}

#[cfg(not(debug_assertions))]
mkenv::make_config! {
    pub struct Hostname {
        pub host: {
            var_name: "EVENT_API_HOST",
            description: "The hostname of the server where the API is running (e.g. https://events.example.org)",
        }
    }
}

mkenv::make_config! {
    pub struct ApiEnv {
        pub db_env: { DbEnv },

        pub port: {
            var_name: "EVENT_API_PORT",
            layers: [
                parsed_from_str<u16>(),
                or_default_val(|| 3000),
            ],
            description: "The port used to expose the API",
            default_val_fmt: "3000",
        },

        pub host: { Hostname },
    }
}

static ENV: OnceCell<ApiEnv> = OnceCell::new();

pub fn env() -> &'static ApiEnv {
    ENV.get().unwrap()
}

pub fn init_env() -> anyhow::Result<()> {
    fn map_err(err: ConfigInitError<'_>) -> anyhow::Error {
        anyhow::anyhow!("{err}")
    }

    let env = ApiEnv::define();
    env.try_init().map_err(map_err)?;
    let _ = ENV.set(env);

    Ok(())
}
