/// Associates an entity marker type with its canonical id prefix at
/// compile time.
///
/// Usually implemented through the [`identifiable!`](crate::identifiable)
/// macro, which also rejects illegal prefix literals at compile time:
///
/// ```
/// use typeid::identifiable;
///
/// struct User;
/// identifiable!(User => "user");
/// ```
///
/// A manual implementation must supply a prefix for which
/// [`is_valid_prefix`](crate::is_valid_prefix) holds.
pub trait Identifiable: 'static {
    /// The canonical prefix for ids of this entity type.
    const PREFIX: &'static str;
}
