mod permit;
pub use self::permit::Permit;
