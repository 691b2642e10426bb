use async_graphql::SimpleObject;
use chrono::NaiveDateTime;
use diesel::prelude::{Insertable, Queryable, Selectable};

use crate::schema::orders;
use crate::schema::products;
use crate::schema::users;

// Order, Product and UserProfile double as the GraphQL object types and as
// the diesel row types: the struct definition is the single column-to-field
// mapping used for both building the select list and decoding rows.

#[derive(Queryable, Selectable, Insertable, SimpleObject, Debug, Clone)]
#[diesel(table_name = orders)]
pub struct Order{
    pub order_id: i32,
    pub quantity: i32,
    pub total_price: f64,
    pub purchase_time: NaiveDateTime,
    pub status: String,
    pub seller_id: i32,
    pub buyer_id: i32,
    pub product_id: i32,
    pub created_at: NaiveDateTime
}

#[derive(Queryable, Selectable, Insertable, SimpleObject, Debug, Clone)]
#[diesel(table_name = products)]
pub struct Product{
    pub product_id: i32,
    pub product_name: String,
    pub price: f64,
    pub quantity: i32,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_sold: bool,
    pub created_at: NaiveDateTime,
    pub seller_id: i32
}

/// The seven user columns the combined query selects for each of the two
/// user participations (seller and buyer).
#[derive(Queryable, SimpleObject, Debug, Clone)]
#[graphql(name = "User")]
pub struct UserProfile{
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>
}

// Full Users row, used when seeding the store.
#[derive(Queryable, Insertable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct User{
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime
}

/// One order joined with its product and the two user profiles it
/// references. Built per request, never persisted.
#[derive(SimpleObject, Debug)]
pub struct CombinedData{
    pub order: Order,
    pub product: Product,
    pub seller: UserProfile,
    pub buyer: UserProfile
}

impl From<(Order, Product, UserProfile, UserProfile)> for CombinedData {
    fn from((order, product, seller, buyer): (Order, Product, UserProfile, UserProfile)) -> Self {
        CombinedData{ order, product, seller, buyer }
    }
}
