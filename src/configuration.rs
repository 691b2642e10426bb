use config::{Config, Environment};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings{
    pub application: ApplicationSettings,
    pub database: DatabaseSettings
}

#[derive(Deserialize, Debug)]
pub struct ApplicationSettings{
    pub host: String,
    pub port: u16
}

/// Connection parameters for the MySQL store, sourced from `DB_HOST`,
/// `DB_USER`, `DB_PASSWORD`, `DB_NAME` and `DB_PORT` (defaults to 3306).
#[derive(Deserialize, Debug)]
pub struct DatabaseSettings{
    pub db_host: String,
    pub db_user: String,
    pub db_password: SecretString,
    pub db_name: String,
    pub db_port: u16
}

impl Settings{
    pub fn get() -> Self{
        let application = Config::builder()
            .set_default("host", "127.0.0.1")
            .and_then(|builder| builder.set_default("port", 8000))
            .expect("Failed to set application defaults")
            .add_source(Environment::with_prefix("APP"))
            .build()
            .expect("Failed to get application configuration")
            .try_deserialize::<ApplicationSettings>()
            .expect("Failed to deserialize to ApplicationSettings struct");

        let database = Config::builder()
            .set_default("db_port", 3306)
            .expect("Failed to set database defaults")
            .add_source(Environment::default())
            .build()
            .expect("Failed to get database configuration")
            .try_deserialize::<DatabaseSettings>()
            .expect("Failed to deserialize to DatabaseSettings struct");

        Settings{ application, database }
    }
}

impl DatabaseSettings{
    pub fn get_database_url(&self) -> SecretString{
        SecretString::from(format!(
            "mysql://{}:{}@{}:{}",
            self.db_user,
            self.db_password.expose_secret(),
            self.db_host,
            self.db_port
        ))
    }

    pub fn get_database_table_url(&self) -> SecretString{
        SecretString::from(format!(
            "mysql://{}:{}@{}:{}/{}",
            self.db_user,
            self.db_password.expose_secret(),
            self.db_host,
            self.db_port,
            self.db_name
        ))
    }
}
