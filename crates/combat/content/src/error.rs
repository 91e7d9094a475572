/// Lookup and consistency failures in the content tables.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("unknown npc `{0}`")]
    UnknownNpc(String),

    #[error("weapon catalog must define `{}`", crate::weapons::UNARMED_ID)]
    MissingUnarmed,

    #[error("weapon `{0}` has zero attack speed")]
    ZeroAttackSpeed(String),

    #[error("duplicate {kind} id `{id}`")]
    DuplicateId { kind: &'static str, id: String },
}
