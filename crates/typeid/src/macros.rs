/// Declares the canonical id prefix for an entity type.
///
/// Implements [`Identifiable`](crate::Identifiable) for the type and
/// statically asserts that the prefix literal satisfies the prefix
/// rules, so a typo fails the build instead of the first mint:
///
/// ```
/// use typeid::{Id, identifiable};
/// use uuid::Uuid;
///
/// struct User;
/// identifiable!(User => "user");
///
/// let id = Id::<User>::from_uuid(Uuid::now_v7());
/// assert!(id.to_string().starts_with("user_"));
/// ```
///
/// An illegal prefix is a compile error:
///
/// ```compile_fail
/// struct Sprocket;
/// typeid::identifiable!(Sprocket => "Sprocket!");
/// ```
#[macro_export]
macro_rules! identifiable {
    ($entity:ty => $prefix:literal) => {
        impl $crate::Identifiable for $entity {
            const PREFIX: &'static str = $prefix;
        }

        const _: () = assert!(
            $crate::is_valid_prefix($prefix),
            "prefix must be 1-63 characters of [a-z_] and must not start or end with '_'"
        );
    };
}
