use std::error::Error;

use chrono::{NaiveDate, NaiveDateTime};
use diesel::{mysql::Mysql, Connection, MysqlConnection, RunQueryDsl};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use marketplace_graphql::{
    configuration::{DatabaseSettings, Settings},
    models::{Order, Product, User},
    schema::{orders, products, users},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;
use secrecy::ExposeSecret;
use uuid::Uuid;

static LOGGER_INSTANCE: Lazy<()> = Lazy::new(|| {
    let log_level = "info".to_string();
    let name = "marketplace-graphql-test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(name, log_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(name, log_level, std::io::sink);
        init_subscriber(subscriber);
    }

    ()
});

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

fn run_migrations(connection: &mut impl MigrationHarness<Mysql>)
    -> Result<(), Box<dyn Error + Send + Sync + 'static>>
{
    connection.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

pub struct TestApp{
    pub host: String,
    pub port: u16,
    pub database: DatabaseSettings,
    pub api_client: reqwest::Client
}

impl TestApp {
    fn create_db(settings: &DatabaseSettings){
        let mut connection = MysqlConnection::establish(settings.get_database_url().expose_secret())
                                .expect("Failed to connect to mysql server");

        let query = format!("CREATE DATABASE `{}`", settings.db_name);
        diesel::sql_query(query)
            .execute(&mut connection)
            .expect("Failed to create test database");

        let mut conn = MysqlConnection::establish(settings.get_database_table_url().expose_secret())
                            .expect("Failed to connect to test database");
        run_migrations(&mut conn).expect("Failed to run migrations");
    }

    pub fn get_app_url(&self) -> String{
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn connection(&self) -> MysqlConnection{
        MysqlConnection::establish(self.database.get_database_table_url().expose_secret())
            .expect("Failed to connect to test database")
    }

    pub async fn spawn_app() -> TestApp{
        Lazy::force(&LOGGER_INSTANCE);

        let mut settings = Settings::get();
        settings.application.port = 0;
        settings.database.db_name = format!("test_{}", Uuid::new_v4().simple());

        // Settings is consumed by Application::new; keep a second copy of
        // the database parameters for seeding connections.
        let database = DatabaseSettings{
            db_name: settings.database.db_name.clone(),
            ..Settings::get().database
        };

        TestApp::create_db(&settings.database);

        let application = Application::new(settings)
                            .await
                            .expect("Failed to build application");

        tokio::task::spawn(application.server);

        let api_client = reqwest::Client::new();

        return TestApp{
            host: application.host,
            port: application.port,
            database,
            api_client
        }
    }

    pub async fn graphql_query(&self, query: &str) -> serde_json::Value{
        let response = self.api_client
            .post(format!("{}/graphql", self.get_app_url()))
            .json(&serde_json::json!({ "query": query }))
            .send()
            .await
            .expect("Failed to execute graphql request");

        assert_eq!(response.status().as_u16(), 200);

        response.json().await.expect("Failed to parse graphql response")
    }
}

pub fn dt(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime{
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, sec)
        .unwrap()
}

pub fn sample_user(user_id: i32) -> User{
    User{
        user_id,
        username: format!("user-{}", user_id),
        email: format!("user-{}@example.com", user_id),
        first_name: format!("First{}", user_id),
        last_name: format!("Last{}", user_id),
        phone_number: Some(format!("+1555{:07}", user_id)),
        address: Some(format!("{} Market Street", user_id)),
        created_at: dt(2024, 1, 1, 8, 0, 0)
    }
}

pub fn sample_product(product_id: i32, seller_id: i32) -> Product{
    Product{
        product_id,
        product_name: format!("product-{}", product_id),
        price: f64::from(product_id) * 10.0,
        quantity: 5,
        description: Some(format!("Description of product {}", product_id)),
        image_url: Some(format!("https://img.example.com/{}.png", product_id)),
        is_sold: false,
        created_at: dt(2024, 1, 2, 9, 0, 0),
        seller_id
    }
}

pub fn sample_order(order_id: i32, product_id: i32, seller_id: i32, buyer_id: i32) -> Order{
    Order{
        order_id,
        quantity: 1,
        total_price: f64::from(order_id) * 10.0,
        purchase_time: dt(2024, 1, 3, 10, 0, 0),
        status: "pending".to_string(),
        seller_id,
        buyer_id,
        product_id,
        created_at: dt(2024, 1, 3, 10, 0, 1)
    }
}

pub fn insert_users(conn: &mut MysqlConnection, rows: &[User]){
    for row in rows.iter(){
        diesel::insert_into(users::table)
            .values(row)
            .execute(conn)
            .expect("Failed to insert user");
    }
}

pub fn insert_products(conn: &mut MysqlConnection, rows: &[Product]){
    for row in rows.iter(){
        diesel::insert_into(products::table)
            .values(row)
            .execute(conn)
            .expect("Failed to insert product");
    }
}

pub fn insert_orders(conn: &mut MysqlConnection, rows: &[Order]){
    for row in rows.iter(){
        diesel::insert_into(orders::table)
            .values(row)
            .execute(conn)
            .expect("Failed to insert order");
    }
}
