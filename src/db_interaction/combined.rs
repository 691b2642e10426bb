use anyhow::Context;
use diesel::{ExpressionMethods, JoinOnDsl, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{
    models::{CombinedData, Order, Product, UserProfile},
    schema::{orders, products, users},
    telemetry::spawn_blocking_with_tracing,
    utils::DbConnection,
};

// The Users table participates in the join twice, once as the selling side
// and once as the buying side.
diesel::alias!(users as sellers: SellerUser, users as buyers: BuyerUser);

// Field order must stay in lock-step with UserProfile; defined once and
// applied to both aliases.
macro_rules! profile_columns {
    ($alias:expr) => {
        $alias.fields((
            users::user_id,
            users::username,
            users::email,
            users::first_name,
            users::last_name,
            users::phone_number,
            users::address,
        ))
    };
}

#[tracing::instrument(
    "Loading combined order data",
    skip(conn)
)]
pub async fn get_combined_data(
    mut conn: DbConnection,
    order_id: Option<i32>
) -> Result<Vec<CombinedData>, anyhow::Error> {

    let rows = spawn_blocking_with_tracing(move || {
        let mut query = orders::table
            .inner_join(products::table.on(orders::product_id.eq(products::product_id)))
            .inner_join(sellers.on(orders::seller_id.eq(sellers.field(users::user_id))))
            .inner_join(buyers.on(orders::buyer_id.eq(buyers.field(users::user_id))))
            .select((
                Order::as_select(),
                Product::as_select(),
                profile_columns!(sellers),
                profile_columns!(buyers),
            ))
            .into_boxed();

        if let Some(order_id) = order_id {
            query = query.filter(orders::order_id.eq(order_id));
        }

        query
            .load::<(Order, Product, UserProfile, UserProfile)>(&mut conn)
            .context("Failed to load combined order rows")
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(rows.into_iter().map(CombinedData::from).collect())
}
