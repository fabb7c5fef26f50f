use fractic_server_error::ServerError;

/// Hand-off to a third-party messaging client. Fire-and-forget: `Ok` means
/// the link was handed over, not that anything was delivered.
pub trait MessagingGateway: Send + Sync {
    fn open_external_link(&self, url: &str) -> Result<(), ServerError>;
}
