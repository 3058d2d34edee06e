//! Catalogue of demonstration entities and their fixtures

use crate::entities::{
    AliasedEntity, IgnoredEntity, OmittedEntity, RenamedEntity, RestructuredEntity,
    TraversalEntity,
};
use jsonmap::{FieldPath, Mappable, Mapper, Result};
use serde_json::Value;

/// One demonstration entity with its sample document
#[derive(Clone, Copy)]
pub struct Example {
    /// Identifier used on the command line
    pub slug: &'static str,
    /// Section title
    pub title: &'static str,
    /// Annotation form being demonstrated
    pub annotation: &'static str,
    /// What the example shows
    pub summary: &'static str,
    /// Sample JSON document
    pub fixture: &'static str,
    /// Map a document onto the entity and render the result
    pub render: fn(&Mapper, &Value) -> Result<String>,
    /// Map a document onto the entity and print the result to stdout
    pub print: fn(&Mapper, &Value) -> Result<()>,
    /// Derived paths of the entity's fields
    pub paths: fn(&Mapper) -> Result<Vec<FieldPath>>,
    /// Name of the entity type
    pub type_name: fn() -> &'static str,
}

impl Example {
    /// Parsed sample document
    pub fn fixture_document(&self) -> Result<Value> {
        Ok(serde_json::from_str(self.fixture)?)
    }

    /// Parse the fixture and map it with `mapper`
    pub fn render_fixture(&self, mapper: &Mapper) -> Result<String> {
        (self.render)(mapper, &self.fixture_document()?)
    }

    /// Short entity type name, without the module path
    pub fn entity_name(&self) -> &'static str {
        let full = (self.type_name)();
        full.rsplit("::").next().unwrap_or(full)
    }
}

impl std::fmt::Debug for Example {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Example")
            .field("slug", &self.slug)
            .field("title", &self.title)
            .field("entity", &self.entity_name())
            .finish()
    }
}

fn render_with<T: Mappable>(mapper: &Mapper, document: &Value) -> Result<String> {
    let object: T = mapper.map_value(document)?;
    jsonmap::render(&object)
}

fn print_with<T: Mappable>(mapper: &Mapper, document: &Value) -> Result<()> {
    let object: T = mapper.map_value(document)?;
    jsonmap::print_object(&object)
}

fn paths_with<T: Mappable>(mapper: &Mapper) -> Result<Vec<FieldPath>> {
    mapper.paths::<T>()
}

const fn example<T: Mappable>(
    slug: &'static str,
    title: &'static str,
    annotation: &'static str,
    summary: &'static str,
    fixture: &'static str,
) -> Example {
    Example {
        slug,
        title,
        annotation,
        summary,
        fixture,
        render: render_with::<T>,
        print: print_with::<T>,
        paths: paths_with::<T>,
        type_name: T::type_name,
    }
}

/// Every demonstration entity, in documentation order
pub const EXAMPLES: &[Example] = &[
    example::<RenamedEntity>(
        "renamed",
        "Renaming Fields",
        r#"field: Text => "key""#,
        "A complete key replaces the field name. `first_name` is read from `firstName`; \
         unannotated fields keep their own name.",
        include_str!("../fixtures/renamed.json"),
    ),
    example::<OmittedEntity>(
        "omitted",
        "Omitting Field Name",
        r#"field: Text => "prefix/""#,
        "An annotation ending in `/` is a prefix. The field name is appended to it, so \
         intermediate objects are walked without declaring a struct for each.",
        include_str!("../fixtures/omitted.json"),
    ),
    example::<IgnoredEntity>(
        "ignored",
        "Ignoring Parts of Structure",
        r#"field: Text => """#,
        "Keys the entity does not describe are skipped. A blank annotation behaves like \
         no annotation and marks a field as deliberately passed through.",
        include_str!("../fixtures/ignored.json"),
    ),
    example::<RestructuredEntity>(
        "restructured",
        "Restructuring Object",
        r#"nested: Struct => "prefix/""#,
        "A nested struct gathers values from several branches of the document. Its \
         fields extend the nested field's path with their own complete keys.",
        include_str!("../fixtures/restructured.json"),
    ),
    example::<TraversalEntity>(
        "traversal",
        "Traversing Paths",
        r#"field: Text => "a/b/c""#,
        "Multi-segment keys descend through several objects at once. A path that does \
         not exist in the document leaves its field empty instead of failing.",
        include_str!("../fixtures/traversal.json"),
    ),
    example::<AliasedEntity>(
        "aliased",
        "Aliasing Paths",
        r#"field: Text => "long/path~alias""#,
        "Text after `~` is a display alias used when paths are printed. It never \
         changes which keys are read.",
        include_str!("../fixtures/aliased.json"),
    ),
];

/// Look up an example by slug
pub fn find(slug: &str) -> Option<&'static Example> {
    EXAMPLES.iter().find(|example| example.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::*;

    fn fixture_value(slug: &str) -> Value {
        serde_json::from_str(find(slug).unwrap().fixture).unwrap()
    }

    #[test]
    fn slugs_are_unique() {
        for (i, example) in EXAMPLES.iter().enumerate() {
            assert!(
                EXAMPLES[i + 1..].iter().all(|other| other.slug != example.slug),
                "duplicate slug {}",
                example.slug
            );
        }
    }

    #[test]
    fn every_fixture_maps() {
        let mapper = Mapper::new();
        for example in EXAMPLES {
            let rendered = example.render_fixture(&mapper).unwrap();
            assert!(!rendered.is_empty(), "{} rendered nothing", example.slug);
        }
    }

    #[test]
    fn renamed_fixture() {
        let entity: RenamedEntity = jsonmap::map_value(&fixture_value("renamed")).unwrap();
        assert_eq!(entity.first_name.as_deref(), Some("Ada"));
        assert_eq!(entity.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(entity.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn omitted_fixture() {
        let entity: OmittedEntity = jsonmap::map_value(&fixture_value("omitted")).unwrap();
        assert_eq!(entity.id.as_deref(), Some("u-1815"));
        assert_eq!(entity.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(entity.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn ignored_fixture() {
        let entity: IgnoredEntity = jsonmap::map_value(&fixture_value("ignored")).unwrap();
        assert_eq!(entity.username.as_deref(), Some("ada"));
        assert_eq!(entity.settings.theme.as_deref(), Some("dark"));
        assert_eq!(entity.settings.language.as_deref(), Some("en-GB"));
    }

    #[test]
    fn restructured_fixture() {
        let entity: RestructuredEntity =
            jsonmap::map_value(&fixture_value("restructured")).unwrap();
        assert_eq!(entity.name.as_deref(), Some("Analytical Engine Ltd"));
        assert_eq!(entity.contact.mobile.as_deref(), Some("+44 20 7946 0018"));
        assert_eq!(entity.contact.email.as_deref(), Some("office@engine.example"));
    }

    #[test]
    fn traversal_fixture_leaves_missing_region_empty() {
        let entity: TraversalEntity = jsonmap::map_value(&fixture_value("traversal")).unwrap();
        assert_eq!(entity.order_id.as_deref(), Some("o-42"));
        assert_eq!(entity.shipping.city.as_deref(), Some("London"));
        assert_eq!(entity.shipping.country.as_deref(), Some("GB"));
        assert_eq!(entity.shipping.region, None);
    }

    #[test]
    fn aliased_fixture() {
        let entity: AliasedEntity = jsonmap::map_value(&fixture_value("aliased")).unwrap();
        assert_eq!(entity.address.as_deref(), Some("221B Baker Street, London"));
        assert_eq!(entity.location.latitude.as_deref(), Some("51.5237"));
        assert_eq!(entity.location.longitude.as_deref(), Some("-0.1585"));
    }

    #[test]
    fn aliased_paths_render_alias() {
        let paths = (find("aliased").unwrap().paths)(&Mapper::new()).unwrap();
        let latitude = paths.iter().find(|p| p.name == "latitude").unwrap();
        assert_eq!(
            latitude.path.to_string(),
            "latitude : results / geometry / location / lat"
        );
    }

    #[test]
    fn entity_name_strips_module_path() {
        assert_eq!(find("renamed").unwrap().entity_name(), "RenamedEntity");
    }

    #[test]
    fn unknown_slug_is_none() {
        assert!(find("missing").is_none());
    }
}
