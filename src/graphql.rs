use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema};

use crate::{
    configuration::DatabaseSettings,
    db_interaction::get_combined_data,
    models::CombinedData,
    utils::open_connection,
};

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Joined view over Orders, Products and the two Users each order
    /// references. With no `orderId` the full join result is returned;
    /// orders with dangling references are excluded by the inner joins.
    #[tracing::instrument(
        "Resolving combinedData query",
        skip(self, ctx)
    )]
    async fn combined_data(
        &self,
        ctx: &Context<'_>,
        order_id: Option<i32>
    ) -> async_graphql::Result<Vec<CombinedData>> {
        let settings = ctx.data_unchecked::<DatabaseSettings>();

        let conn = open_connection(settings).await?;
        let combined_data = get_combined_data(conn, order_id).await?;

        Ok(combined_data)
    }
}

pub fn build_schema(database: DatabaseSettings) -> AppSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(database)
        .finish()
}
