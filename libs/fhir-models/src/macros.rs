//! Declarative helpers for record types

/// Implement [`Element`](crate::Element) (and [`ModifierElement`](crate::ModifierElement)
/// for backbone elements) from a type's `static` metadata.
///
/// ```ignore
/// impl_element!(Coding, CODING_INFO);
/// impl_element!(ConsentProvision, CONSENT_PROVISION_INFO, backbone);
/// ```
macro_rules! impl_element {
    ($ty:ty, $info:ident) => {
        impl $crate::element::Element for $ty {
            fn type_info() -> &'static $crate::descriptor::TypeInfo {
                &$info
            }

            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            fn extensions(&self) -> &[$crate::datatypes::Extension] {
                &self.extension
            }

            fn primitive_elements(&self) -> &$crate::element::PrimitiveElements {
                &self.primitive_elements
            }
        }
    };
    ($ty:ty, $info:ident, backbone) => {
        impl_element!($ty, $info);

        impl $crate::element::ModifierElement for $ty {
            fn modifier_extensions(&self) -> &[$crate::datatypes::Extension] {
                &self.modifier_extension
            }
        }
    };
}

/// Implement [`Resource`](crate::Resource) together with its element traits.
macro_rules! impl_resource {
    ($ty:ident, $info:ident) => {
        impl_element!($ty, $info, backbone);

        impl $crate::element::Resource for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn meta(&self) -> Option<&$crate::datatypes::Meta> {
                self.meta.as_ref()
            }
        }

        impl $ty {
            pub fn new() -> Self {
                Self::default()
            }
        }
    };
}

/// Declare the enum backing a `name[x]` choice field.
///
/// Each variant is serialized under its type-suffixed key. The enum is meant
/// to be flattened into its parent record as an `Option`, read through
/// `element::deserialize_choice`:
///
/// ```ignore
/// #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
/// pub source: Option<ConsentSource>,
/// ```
macro_rules! choice_type {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident($ty:ty) => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant($ty),
            )+
        }

        impl $name {
            /// Every key this choice can appear under
            pub const WIRE_KEYS: &'static [&'static str] = &[$($key),+];

            /// Key of the populated alternative
            pub fn wire_key(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $key, )+
                }
            }
        }

        impl $crate::element::ChoiceType for $name {
            const WIRE_KEYS: &'static [&'static str] = &[$($key),+];

            fn wire_key(&self) -> &'static str {
                $name::wire_key(self)
            }
        }
    };
}
