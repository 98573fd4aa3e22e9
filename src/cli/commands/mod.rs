mod apply;
mod check;
mod schema;
mod show;

pub use apply::ApplyCommand;
pub use check::CheckCommand;
pub use schema::SchemaCommand;
pub use show::ShowCommand;
