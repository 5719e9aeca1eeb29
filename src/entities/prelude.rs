pub use super::transactions::Entity as Transactions;
