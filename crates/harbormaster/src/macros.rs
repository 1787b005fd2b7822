//! Macros for declaring closed kind enumerations

/// Declare a kind enumeration backed by a fixed allow-list of tags
///
/// # Examples
///
/// ```rust,ignore
/// closed_kind! {
///     /// Transport of a chart source
///     pub enum ChartSourceKind for Resource::HelmRepository {
///         Https => "HTTPS",
///         Oci => "OCI",
///     }
/// }
/// ```
macro_rules! closed_kind {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $resource:path {
            $( $(#[$variant_meta:meta])* $variant:ident => $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl $name {
            /// Every variant, in allow-list order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $tag ),+
                }
            }
        }

        impl $crate::kind::ClosedKind for $name {
            const RESOURCE: $crate::resource::Resource = $resource;
            const ALLOWED_VALUES: &'static [&'static str] = &[$($tag),+];

            fn as_str(&self) -> &'static str {
                $name::as_str(self)
            }

            fn lookup(value: &str) -> Option<Self> {
                match value {
                    $( $tag => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::InvalidKindError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::kind::ClosedKind>::from_string(s)
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::error::InvalidKindError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                <$name as $crate::kind::ClosedKind>::from_string(value)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                <$name as $crate::kind::ClosedKind>::from_string(&value)
                    .map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}
