mod graphiql;
mod helpers;
