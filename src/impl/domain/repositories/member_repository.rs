use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::Member;

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn update_member(&self, member: &Member) -> Result<(), ServerError>;
}

#[async_trait]
impl<T: MemberRepository + ?Sized> MemberRepository for Arc<T> {
    async fn update_member(&self, member: &Member) -> Result<(), ServerError> {
        (**self).update_member(member).await
    }
}
