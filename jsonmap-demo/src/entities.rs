//! Demonstration entities, one per annotation form

use jsonmap::{mappable, Text};

mappable! {
    /// Fields renamed with complete keys
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RenamedEntity {
        pub first_name: Text => "firstName",
        pub last_name: Text => "lastName",
        pub email: Text,
    }
}

mappable! {
    /// Field names nested under prefixes
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct OmittedEntity {
        pub id: Text,
        pub name: Text => "user/profile/",
        pub email: Text => "user/contact/",
    }
}

mappable! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct IgnoredSettings {
        pub theme: Text => "",
        pub language: Text,
    }
}

mappable! {
    /// Describes only part of the document; blank annotations pass through
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct IgnoredEntity {
        pub username: Text => "",
        pub settings: IgnoredSettings => "",
    }
}

mappable! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Contact {
        pub mobile: Text => "phones/mobile",
        pub email: Text => "emails/primary",
    }
}

mappable! {
    /// Groups scattered keys into a struct of its own
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RestructuredEntity {
        pub name: Text,
        pub contact: Contact => "details/",
    }
}

mappable! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Shipping {
        pub city: Text => "address/city/name",
        pub country: Text => "address/country/code",
        pub region: Text => "address/region/name",
    }
}

mappable! {
    /// Deep paths below a nested base
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct TraversalEntity {
        pub order_id: Text => "order/id",
        pub shipping: Shipping => "order/",
    }
}

mappable! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Location {
        pub latitude: Text => "lat~latitude",
        pub longitude: Text => "lng~longitude",
    }
}

mappable! {
    /// Long paths with short display aliases
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AliasedEntity {
        pub address: Text => "results/formatted_address~address",
        pub location: Location => "results/geometry/location~location",
    }
}
