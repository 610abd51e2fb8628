//! Record elaboration
//!
//! [`keyed_record!`] turns a schema listing into a concrete record
//! struct: one slot per entry in schema order, with key and position
//! accessors resolved statically by the compiler. This is the struct
//! generation strategy for heterogeneous records: per-field offsets are
//! fixed when the type is elaborated, and the access path carries no
//! lookup table, no hashing, and no dispatch.

/// Elaborate a record type from a schema listing.
///
/// Each entry pairs a struct field with its key type (declared via
/// [`field_keys!`](crate::field_keys)) and value type. The generated
/// struct takes a [`LayoutPolicy`](crate::LayoutPolicy) parameter `L`
/// (default [`Native`](crate::Native)) and is `#[repr(C)]`, so its
/// footprint is the ordered concatenation of slot footprints.
///
/// ```
/// use tessera_record::{field_keys, keyed_record, Aligned, Record};
///
/// field_keys! {
///     /// Mass density at the cell center.
///     pub Density,
///     pub Velocity,
/// }
///
/// keyed_record! {
///     /// Per-cell diagnostic sample.
///     pub struct CellSample {
///         density: Density => f64,
///         velocity: Velocity => [f64; 3],
///     }
/// }
///
/// let mut sample = CellSample::default();
/// *sample.get_mut::<Density>() = 1.2;
/// assert_eq!(*sample.at::<0>(), 1.2);
///
/// // The padded elaboration of the same schema.
/// let padded = CellSample::<Aligned>::default();
/// assert_eq!(*padded.get::<Density>(), 0.0);
/// assert_eq!(CellSample::<Aligned>::DIM, 2);
/// ```
///
/// A key that is not part of the schema, or a position outside
/// `[0, dim)`, has no accessor impl and fails to compile; listing one key
/// twice produces conflicting impls and also fails to compile. The
/// invalid record type cannot be elaborated at all.
///
/// Records default-construct slot by slot, and a slot builds directly
/// from one value of its type (`SlotStorage::new` / `From`). A combined
/// multi-field initializer is deliberately not generated; builders
/// compose on top of the accessors.
#[macro_export]
macro_rules! keyed_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $key:ty => $value:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(C)]
        $vis struct $name<L: $crate::LayoutPolicy = $crate::Native> {
            $(
                $(#[$fmeta])*
                $field: <L as $crate::LayoutPolicy>::Slot<$value>,
            )+
        }

        impl<L: $crate::LayoutPolicy> $name<L> {
            /// Borrow the slot selected by the key `K`.
            $vis fn get<K>(&self) -> &<Self as $crate::Keyed<K>>::Value
            where
                K: $crate::FieldKey,
                Self: $crate::Keyed<K>,
            {
                <Self as $crate::Keyed<K>>::field(self)
            }

            /// Mutably borrow the slot selected by the key `K`.
            $vis fn get_mut<K>(&mut self) -> &mut <Self as $crate::Keyed<K>>::Value
            where
                K: $crate::FieldKey,
                Self: $crate::Keyed<K>,
            {
                <Self as $crate::Keyed<K>>::field_mut(self)
            }

            /// Borrow the slot at position `P` in schema order.
            $vis fn at<const P: usize>(&self) -> &<Self as $crate::At<P>>::Value
            where
                Self: $crate::At<P>,
            {
                <Self as $crate::At<P>>::slot(self)
            }

            /// Mutably borrow the slot at position `P` in schema order.
            $vis fn at_mut<const P: usize>(&mut self) -> &mut <Self as $crate::At<P>>::Value
            where
                Self: $crate::At<P>,
            {
                <Self as $crate::At<P>>::slot_mut(self)
            }
        }

        impl<L: $crate::LayoutPolicy> $crate::Record for $name<L> {
            const DIM: usize = [$(stringify!($field)),+].len();
            const LAYOUT: $crate::LayoutKind = <L as $crate::LayoutPolicy>::KIND;

            fn schema() -> $crate::Schema {
                $crate::Schema::from_distinct(::std::vec::Vec::from([
                    $( $crate::FieldDef::of::<$value>(<$key as $crate::FieldKey>::NAME), )+
                ]))
            }
        }

        $(
            impl<L: $crate::LayoutPolicy> $crate::Keyed<$key> for $name<L> {
                type Value = $value;

                fn field(&self) -> &$value {
                    $crate::SlotStorage::get(&self.$field)
                }

                fn field_mut(&mut self) -> &mut $value {
                    $crate::SlotStorage::get_mut(&mut self.$field)
                }
            }
        )+

        impl<L: $crate::LayoutPolicy> ::core::default::Default for $name<L>
        where
            $( <L as $crate::LayoutPolicy>::Slot<$value>: ::core::default::Default, )+
        {
            fn default() -> Self {
                Self {
                    $( $field: ::core::default::Default::default(), )+
                }
            }
        }

        impl<L: $crate::LayoutPolicy> ::core::clone::Clone for $name<L>
        where
            $( <L as $crate::LayoutPolicy>::Slot<$value>: ::core::clone::Clone, )+
        {
            fn clone(&self) -> Self {
                Self {
                    $( $field: ::core::clone::Clone::clone(&self.$field), )+
                }
            }
        }

        impl<L: $crate::LayoutPolicy> ::core::marker::Copy for $name<L>
        where
            $( <L as $crate::LayoutPolicy>::Slot<$value>: ::core::marker::Copy, )+
        {
        }

        impl<L: $crate::LayoutPolicy> ::core::fmt::Debug for $name<L>
        where
            $( <L as $crate::LayoutPolicy>::Slot<$value>: ::core::fmt::Debug, )+
        {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(stringify!($name))
                    $( .field(stringify!($field), &self.$field) )+
                    .finish()
            }
        }

        impl<L: $crate::LayoutPolicy> ::core::cmp::PartialEq for $name<L>
        where
            $( <L as $crate::LayoutPolicy>::Slot<$value>: ::core::cmp::PartialEq, )+
        {
            fn eq(&self, other: &Self) -> bool {
                true $( && self.$field == other.$field )+
            }
        }

        $crate::keyed_record!(@positions $name ; (0) ; $( ($field, $value) )+);
    };

    (@positions $name:ident ; ($idx:expr) ; ($field:ident, $value:ty) $($rest:tt)*) => {
        impl<L: $crate::LayoutPolicy> $crate::At<{ $idx }> for $name<L> {
            type Value = $value;

            fn slot(&self) -> &$value {
                $crate::SlotStorage::get(&self.$field)
            }

            fn slot_mut(&mut self) -> &mut $value {
                $crate::SlotStorage::get_mut(&mut self.$field)
            }
        }

        $crate::keyed_record!(@positions $name ; ($idx + 1) ; $($rest)*);
    };

    (@positions $name:ident ; ($idx:expr) ; ) => {};
}
