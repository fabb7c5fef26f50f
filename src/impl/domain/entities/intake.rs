/// One row of a bulk member import, after placeholders have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkMemberInput {
    pub name: String,
    pub phone: String,
}
