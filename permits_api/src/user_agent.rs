/// User agent sent with every request, identifying this client and version.
pub fn get_user_agent() -> &'static str {
    concat!("permits_api/", env!("CARGO_PKG_VERSION"))
}
