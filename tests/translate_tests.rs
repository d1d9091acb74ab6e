// tests/translate_tests.rs

use sramp_query::error::TranslationError;
use sramp_query::parser::parse_query;
use sramp_query::schema::{QuerySchema, XPATH_FUNCTIONS_NS};
use sramp_query::translate::{
    to_jcr_sql2, ClassificationResolver, IdentityClassifications, JcrSql2Translator, OrderBy,
};
use test_case::test_case;

fn translate(input: &str) -> Result<String, TranslationError> {
    translate_ordered(input, None)
}

fn translate_ordered(input: &str, order_by: Option<OrderBy>) -> Result<String, TranslationError> {
    let schema = QuerySchema::default();
    let query = parse_query(input, &schema).unwrap();
    to_jcr_sql2(&query, &schema, &IdentityClassifications, order_by)
}

const SELECT: &str = "SELECT artifact.* FROM [sramp:baseArtifactType] AS artifact";
const JOIN_1: &str = " JOIN [sramp:relationship] AS relationship1 ON ISCHILDNODE(relationship1, artifact)";
const JOIN_2: &str = " JOIN [sramp:relationship] AS relationship2 ON ISCHILDNODE(relationship2, artifact)";

// ============================================================================
// Selectors and simple predicates
// ============================================================================

#[test_case(
    "/s-ramp/xsd/XsdDocument",
    " WHERE artifact.[sramp:artifactType] = 'XsdDocument'"
    ; "artifact type"
)]
#[test_case(
    "/s-ramp/xsd",
    " WHERE artifact.[sramp:artifactModel] = 'xsd'"
    ; "artifact model"
)]
#[test_case(
    "/s-ramp/xsd[@derived = 'true']",
    " WHERE artifact.[sramp:artifactModel] = 'xsd' AND (artifact.[sramp:derived] = 'true')"
    ; "model with boolean property"
)]
#[test_case(
    "/s-ramp",
    " WHERE artifact.[sramp:artifactModel] LIKE '%'"
    ; "every artifact"
)]
#[test_case(
    "/s-ramp/xsd/XsdDocument[@name = 'foo']",
    " WHERE artifact.[sramp:artifactType] = 'XsdDocument' AND (artifact.[sramp:name] = 'foo')"
    ; "name comparison"
)]
#[test_case(
    "/s-ramp/xsd/XsdDocument[@createdBy = 'lincoln73']",
    " WHERE artifact.[sramp:artifactType] = 'XsdDocument' AND (artifact.[jcr:createdBy] = 'lincoln73')"
    ; "reserved property with jcr column"
)]
#[test_case(
    "/s-ramp/xsd/XsdDocument[@prop1]",
    " WHERE artifact.[sramp:artifactType] = 'XsdDocument' AND (artifact.[sramp-properties:prop1] LIKE '%')"
    ; "custom property existence"
)]
#[test_case(
    "/s-ramp/xsd/XsdDocument[@version = '1.0' and @prop1 = 'value1']",
    " WHERE artifact.[sramp:artifactType] = 'XsdDocument' AND (artifact.[version] = '1.0' AND artifact.[sramp-properties:prop1] = 'value1')"
    ; "and of two comparisons"
)]
#[test_case(
    "/s-ramp/xsd/XsdDocument[@version = '1.0' or @prop1 = 'value1']",
    " WHERE artifact.[sramp:artifactType] = 'XsdDocument' AND (artifact.[version] = '1.0' OR artifact.[sramp-properties:prop1] = 'value1')"
    ; "or of two comparisons"
)]
#[test_case(
    "/s-ramp/xsd/XsdDocument[@maven.groupId = 'ggg' and @maven.artifactId = 'aaa' and @maven.version = '1.0.0']",
    " WHERE artifact.[sramp:artifactType] = 'XsdDocument' AND (artifact.[sramp-properties:maven.groupId] = 'ggg' AND artifact.[sramp-properties:maven.artifactId] = 'aaa' AND artifact.[sramp-properties:maven.version] = '1.0.0')"
    ; "dotted custom properties"
)]
fn test_simple_queries(input: &str, expected_where: &str) {
    assert_eq!(translate(input).unwrap(), format!("{}{}", SELECT, expected_where));
}

// ============================================================================
// Relationships
// ============================================================================

#[test]
fn test_relationship_existence() {
    assert_eq!(
        translate("/s-ramp/xsd/XsdDocument[relatedDocument]").unwrap(),
        format!(
            "{}{} WHERE artifact.[sramp:artifactType] = 'XsdDocument' AND (relationship1.[sramp:relationshipType] = 'relatedDocument')",
            SELECT, JOIN_1
        )
    );
}

#[test]
fn test_two_relationships_get_numbered_aliases() {
    assert_eq!(
        translate("/s-ramp/xsd/XsdDocument[relatedDocument and includedXsds]").unwrap(),
        format!(
            "{}{}{} WHERE artifact.[sramp:artifactType] = 'XsdDocument' AND (relationship1.[sramp:relationshipType] = 'relatedDocument' AND relationship2.[sramp:relationshipType] = 'includedXsds')",
            SELECT, JOIN_1, JOIN_2
        )
    );
}

#[test]
fn test_relationship_target_predicate() {
    assert_eq!(
        translate("/s-ramp/xsd/XsdDocument[relatedDocument[@name = 'foo']]").unwrap(),
        format!(
            "{}{} WHERE artifact.[sramp:artifactType] = 'XsdDocument' AND ((relationship1.[sramp:relationshipType] = 'relatedDocument' AND relationship1.[sramp:relationshipTarget] IN (SELECT [jcr:uuid] FROM [sramp:baseArtifactType] AS target WHERE target.[sramp:name] = 'foo')))",
            SELECT, JOIN_1
        )
    );
}

#[test_case("and", "AND" ; "joined with and")]
#[test_case("or", "OR" ; "joined with or")]
fn test_two_relationship_target_predicates(keyword: &str, sql: &str) {
    let input = format!(
        "/s-ramp/xsd/XsdDocument[relatedDocument[@name = 'foo'] {} importedBy[@uuid = '12345']]",
        keyword
    );
    assert_eq!(
        translate(&input).unwrap(),
        format!(
            "{}{}{} WHERE artifact.[sramp:artifactType] = 'XsdDocument' AND ((relationship1.[sramp:relationshipType] = 'relatedDocument' AND relationship1.[sramp:relationshipTarget] IN (SELECT [jcr:uuid] FROM [sramp:baseArtifactType] AS target WHERE target.[sramp:name] = 'foo')) {} (relationship2.[sramp:relationshipType] = 'importedBy' AND relationship2.[sramp:relationshipTarget] IN (SELECT [jcr:uuid] FROM [sramp:baseArtifactType] AS target WHERE target.[sramp:uuid] = '12345')))",
            SELECT, JOIN_1, JOIN_2, sql
        )
    );
}

#[test]
fn test_matches_inside_relationship_predicate() {
    assert_eq!(
        translate("/s-ramp/xsd/XsdDocument[relatedDocument[fn:matches(@name, 'fo.*')]]").unwrap(),
        format!(
            "{}{} WHERE artifact.[sramp:artifactType] = 'XsdDocument' AND ((relationship1.[sramp:relationshipType] = 'relatedDocument' AND relationship1.[sramp:relationshipTarget] IN (SELECT [jcr:uuid] FROM [sramp:baseArtifactType] AS target WHERE target.[sramp:name] LIKE 'fo%')))",
            SELECT, JOIN_1
        )
    );
}

#[test_case("getRelationshipAttribute", "relationship1" ; "relationship attribute")]
#[test_case("getTargetAttribute", "target" ; "target attribute")]
fn test_other_attributes(function: &str, alias: &str) {
    let input = format!(
        "/s-ramp/wsdl/WsdlDocument[importedXsds[s-ramp:{}(., 'scope') = 'compile']]",
        function
    );
    assert_eq!(
        translate(&input).unwrap(),
        format!(
            "{}{} WHERE artifact.[sramp:artifactType] = 'WsdlDocument' AND ((relationship1.[sramp:relationshipType] = 'importedXsds' AND relationship1.[sramp:relationshipTarget] IN (SELECT [jcr:uuid] FROM [sramp:baseArtifactType] AS target WHERE {}.[sramp-otherAttributes:scope] = 'compile')))",
            SELECT, JOIN_1, alias
        )
    );
}

#[test]
fn test_top_level_relationship_step_selects_targets() {
    assert_eq!(
        translate("/s-ramp/wsdl/WsdlDocument[@name = 'orders']/importedXsds").unwrap(),
        "SELECT artifact2.* FROM [sramp:baseArtifactType] AS artifact \
         JOIN [sramp:relationship] AS relationship1 ON ISCHILDNODE(relationship1, artifact) \
         JOIN [sramp:baseArtifactType] AS artifact2 ON relationship1.[sramp:relationshipTarget] = artifact2.[jcr:uuid] \
         WHERE artifact.[sramp:artifactType] = 'WsdlDocument' AND (artifact.[sramp:name] = 'orders') \
         AND relationship1.[sramp:relationshipType] = 'importedXsds'"
    );
}

#[test]
fn test_top_level_step_predicate_filters_targets() {
    let sql = translate("/s-ramp/wsdl/WsdlDocument/importedXsds[@name = 'types']").unwrap();
    assert!(sql.starts_with("SELECT artifact2.* "));
    assert!(sql.ends_with(
        "AND relationship1.[sramp:relationshipType] = 'importedXsds' AND (artifact2.[sramp:name] = 'types')"
    ));
}

// ============================================================================
// Extended types
// ============================================================================

#[test_case("/s-ramp/ext/MavenPom" ; "explicit ext model")]
#[test_case("//MavenPom" ; "unknown type shorthand")]
#[test_case("/s-ramp/maven/MavenPom" ; "unknown type under other model")]
fn test_extended_types(input: &str) {
    assert_eq!(
        translate(input).unwrap(),
        format!(
            "{} WHERE artifact.[sramp:artifactType] IN ('ExtendedArtifactType', 'ExtendedDocument') AND artifact.[sramp:extendedType] = 'MavenPom'",
            SELECT
        )
    );
}

// ============================================================================
// Functions
// ============================================================================

#[test_case(
    "/s-ramp/xsd/XsdDocument[s-ramp:exactlyClassifiedByAllOf(., '#China')]",
    "(artifact.[sramp:classifiedBy] = '#China')"
    ; "exactly all of one"
)]
#[test_case(
    "/s-ramp/xsd/XsdDocument[s-ramp:exactlyClassifiedByAllOf(., '#Spicy', '#Sweet')]",
    "((artifact.[sramp:classifiedBy] = '#Spicy' AND artifact.[sramp:classifiedBy] = '#Sweet'))"
    ; "exactly all of two"
)]
#[test_case(
    "/s-ramp/xsd/XsdDocument[s-ramp:exactlyClassifiedByAnyOf(., '#China')]",
    "(artifact.[sramp:classifiedBy] = '#China')"
    ; "exactly any of one"
)]
#[test_case(
    "/s-ramp/xsd/XsdDocument[s-ramp:exactlyClassifiedByAnyOf(., '#Spicy', '#Sweet')]",
    "((artifact.[sramp:classifiedBy] = '#Spicy' OR artifact.[sramp:classifiedBy] = '#Sweet'))"
    ; "exactly any of two"
)]
#[test_case(
    "/s-ramp/xsd/XsdDocument[s-ramp:classifiedByAnyOf(., '#Spicy', '#Sweet')]",
    "((artifact.[sramp:normalizedClassifiedBy] = '#Spicy' OR artifact.[sramp:normalizedClassifiedBy] = '#Sweet'))"
    ; "normalized any of two"
)]
#[test_case(
    "/s-ramp/xsd/XsdDocument[classifiedByAllOf(., '#Spicy', '#Sweet')]",
    "((artifact.[sramp:normalizedClassifiedBy] = '#Spicy' AND artifact.[sramp:normalizedClassifiedBy] = '#Sweet'))"
    ; "unprefixed normalized all of two"
)]
#[test_case(
    "/s-ramp/xsd/XsdDocument[xp2:matches(@name, '.*account.*')]",
    "(artifact.[sramp:name] LIKE '%account%')"
    ; "matches with wildcards on both sides"
)]
#[test_case(
    "/s-ramp/xsd/XsdDocument[xp2:matches(@description, 'Hello.*')]",
    "(artifact.[sramp:description] LIKE 'Hello%')"
    ; "matches with trailing wildcard"
)]
#[test_case(
    "/s-ramp/xsd/XsdDocument[xp2:matches(@description, 'Hello.*') and xp2:matches(@version, '.*')]",
    "(artifact.[sramp:description] LIKE 'Hello%' AND artifact.[version] LIKE '%')"
    ; "two matches"
)]
#[test_case(
    "/s-ramp/xsd/XsdDocument[fn:matches(., 'invoice')]",
    "(CONTAINS(artifact.*, 'invoice'))"
    ; "full text"
)]
#[test_case(
    "/s-ramp/xsd/XsdDocument[fn:not(@name = 'foo')]",
    "(NOT (artifact.[sramp:name] = 'foo'))"
    ; "not"
)]
#[test_case(
    "/s-ramp/xsd/XsdDocument[fn:not(@a or @b) and @c]",
    "(NOT (artifact.[sramp-properties:a] LIKE '%' OR artifact.[sramp-properties:b] LIKE '%') AND artifact.[sramp-properties:c] LIKE '%')"
    ; "not of or"
)]
fn test_functions(input: &str, expected_predicate: &str) {
    assert_eq!(
        translate(input).unwrap(),
        format!(
            "{} WHERE artifact.[sramp:artifactType] = 'XsdDocument' AND {}",
            SELECT, expected_predicate
        )
    );
}

struct Ontology;

impl ClassificationResolver for Ontology {
    fn resolve(&self, classifier: &str) -> Result<String, TranslationError> {
        match classifier {
            "China" | "#China" => Ok("http://example.org/world#China".to_string()),
            "Japan" => Ok("http://example.org/world#Japan".to_string()),
            other => Err(TranslationError::Classification {
                classifier: other.to_string(),
                reason: "not in the world ontology".to_string(),
            }),
        }
    }
}

#[test]
fn test_classifiers_go_through_the_resolver() {
    let schema = QuerySchema::default();
    let query = parse_query(
        "/s-ramp[s-ramp:classifiedByAnyOf(., 'China', '#China', 'Japan')]",
        &schema,
    )
    .unwrap();
    let sql = to_jcr_sql2(&query, &schema, &Ontology, None).unwrap();
    assert!(sql.ends_with(
        "AND ((artifact.[sramp:normalizedClassifiedBy] = 'http://example.org/world#China' OR artifact.[sramp:normalizedClassifiedBy] = 'http://example.org/world#Japan'))"
    ));
}

#[test]
fn test_unresolvable_classifier() {
    let schema = QuerySchema::default();
    let query = parse_query("/s-ramp[s-ramp:classifiedByAnyOf(., 'Mars')]", &schema).unwrap();
    let err = to_jcr_sql2(&query, &schema, &Ontology, None).unwrap_err();
    assert_eq!(
        err,
        TranslationError::Classification {
            classifier: "Mars".to_string(),
            reason: "not in the world ontology".to_string(),
        }
    );
}

// ============================================================================
// Literals
// ============================================================================

#[test_case("/s-ramp[@contentSize >= 1024]", "(artifact.[sramp:contentSize] >= 1024)" ; "integer")]
#[test_case("/s-ramp[@version = 1.50]", "(artifact.[version] = 1.50)" ; "decimal keeps scale")]
#[test_case(
    "/s-ramp[@contentSize = -0.0000000000000000000000000000000000]",
    "(artifact.[sramp:contentSize] = -0.0000000000000000000000000000000000)"
    ; "long negative zero keeps sign"
)]
#[test_case("/s-ramp[@name = 'it''s']", "(artifact.[sramp:name] = 'it''s')" ; "embedded quote")]
#[test_case("/s-ramp[@name = \"it's\"]", "(artifact.[sramp:name] = 'it''s')" ; "double quoted")]
#[test_case("/s-ramp[@name != 'a']", "(artifact.[sramp:name] <> 'a')" ; "not equal")]
#[test_case(
    "/s-ramp[@createdTimestamp > '2013-02-28']",
    "(artifact.[jcr:created] > CAST('2013-02-28' AS DATE))"
    ; "date column casts date literal"
)]
#[test_case(
    "/s-ramp[@lastModifiedTimestamp <= '2013-02-28T10:11:12Z']",
    "(artifact.[jcr:lastModified] <= CAST('2013-02-28T10:11:12Z' AS DATE))"
    ; "date column casts date time literal"
)]
#[test_case(
    "/s-ramp[@createdTimestamp = 'yesterday']",
    "(artifact.[jcr:created] = 'yesterday')"
    ; "non date text is not cast"
)]
#[test_case(
    "/s-ramp[@createdTimestamp = 'released 2013-01-01 by ops']",
    "(artifact.[jcr:created] = 'released 2013-01-01 by ops')"
    ; "text containing a date is not cast"
)]
#[test_case(
    "/s-ramp[@name = '2013-02-28']",
    "(artifact.[sramp:name] = '2013-02-28')"
    ; "text column is not cast"
)]
fn test_literals(input: &str, expected_predicate: &str) {
    assert_eq!(
        translate(input).unwrap(),
        format!(
            "{} WHERE artifact.[sramp:artifactModel] LIKE '%' AND {}",
            SELECT, expected_predicate
        )
    );
}

// ============================================================================
// Grouping
// ============================================================================

#[test]
fn test_explicit_group_is_kept() {
    assert_eq!(
        translate("/s-ramp[(@a or @b) and @c]").unwrap(),
        format!(
            "{} WHERE artifact.[sramp:artifactModel] LIKE '%' AND ((artifact.[sramp-properties:a] LIKE '%' OR artifact.[sramp-properties:b] LIKE '%') AND artifact.[sramp-properties:c] LIKE '%')",
            SELECT
        )
    );
}

#[test]
fn test_and_over_or_needs_no_parentheses() {
    assert_eq!(
        translate("/s-ramp[@a or @b and @c]").unwrap(),
        format!(
            "{} WHERE artifact.[sramp:artifactModel] LIKE '%' AND (artifact.[sramp-properties:a] LIKE '%' OR artifact.[sramp-properties:b] LIKE '%' AND artifact.[sramp-properties:c] LIKE '%')",
            SELECT
        )
    );
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_order_by_reserved_property() {
    let sql = translate_ordered("/s-ramp/xsd", Some(OrderBy::ascending("lastModifiedTimestamp"))).unwrap();
    assert!(sql.ends_with("WHERE artifact.[sramp:artifactModel] = 'xsd' ORDER BY artifact.[jcr:lastModified] ASC"));

    let sql = translate_ordered("/s-ramp/xsd", Some(OrderBy::descending("name"))).unwrap();
    assert!(sql.ends_with(" ORDER BY artifact.[sramp:name] DESC"));
}

#[test]
fn test_order_by_unmapped_property_is_ignored() {
    assert_eq!(
        translate_ordered("/s-ramp/xsd", Some(OrderBy::ascending("prop1"))).unwrap(),
        translate("/s-ramp/xsd").unwrap()
    );
}

#[test]
fn test_order_by_follows_selected_alias() {
    let sql = translate_ordered(
        "/s-ramp/wsdl/WsdlDocument/importedXsds",
        Some(OrderBy::ascending("name")),
    )
    .unwrap();
    assert!(sql.ends_with(" ORDER BY artifact2.[sramp:name] ASC"));
}

// ============================================================================
// Translator state
// ============================================================================

#[test]
fn test_translator_can_be_reused() {
    let schema = QuerySchema::default();
    let first = parse_query("/s-ramp/xsd/XsdDocument[relatedDocument and includedXsds]", &schema).unwrap();
    let second = parse_query("/s-ramp/xsd/XsdDocument[relatedDocument]", &schema).unwrap();

    let mut translator = JcrSql2Translator::new(&schema, &IdentityClassifications);
    first.accept(&mut translator).unwrap();
    let first_sql = translator.result_query().unwrap();
    second.accept(&mut translator).unwrap();
    let second_sql = translator.result_query().unwrap();

    assert_eq!(first_sql, translate("/s-ramp/xsd/XsdDocument[relatedDocument and includedXsds]").unwrap());
    assert_eq!(second_sql, translate("/s-ramp/xsd/XsdDocument[relatedDocument]").unwrap());
    assert!(!second_sql.contains("relationship2"));
}

#[test]
fn test_same_tree_translates_identically_twice() {
    let schema = QuerySchema::default();
    let query = parse_query("/s-ramp/xsd/XsdDocument[relatedDocument[@name = 'foo']]", &schema).unwrap();
    let a = to_jcr_sql2(&query, &schema, &IdentityClassifications, None).unwrap();
    let b = to_jcr_sql2(&query, &schema, &IdentityClassifications, None).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_failed_translation_has_no_result() {
    let schema = QuerySchema::default();
    let query = parse_query("/s-ramp[fn:nope(.)]", &schema).unwrap();
    let mut translator = JcrSql2Translator::new(&schema, &IdentityClassifications);
    assert!(query.accept(&mut translator).is_err());
    assert_eq!(translator.result_query(), Err(TranslationError::NotTranslated));
}

// ============================================================================
// Schema overrides
// ============================================================================

#[test]
fn test_schema_changes_columns() {
    let schema = QuerySchema::from_toml_str(
        r#"
custom_property_prefix = "props"

[core_properties.name]
column = "dc:title"
"#,
    )
    .unwrap();
    let query = parse_query("/s-ramp[@name = 'a' and @owner = 'b']", &schema).unwrap();
    let sql = to_jcr_sql2(&query, &schema, &IdentityClassifications, None).unwrap();
    assert!(sql.ends_with("AND (artifact.[dc:title] = 'a' AND artifact.[props:owner] = 'b')"));
}

// ============================================================================
// Errors
// ============================================================================

#[test_case(
    "/s-ramp[@foo:name = 'x']",
    TranslationError::UnresolvedPrefix("foo".to_string())
    ; "undeclared property prefix"
)]
#[test_case(
    "/s-ramp[@fn:name = 'x']",
    TranslationError::InvalidPropertyNamespace(XPATH_FUNCTIONS_NS.to_string())
    ; "property outside s-ramp namespace"
)]
#[test_case(
    "/s-ramp[s-ramp:matches(@name, 'x')]",
    TranslationError::BadFunctionNamespace("matches".to_string())
    ; "matches in s-ramp namespace"
)]
#[test_case(
    "/s-ramp[not(@name = 'x')]",
    TranslationError::BadFunctionNamespace("not".to_string())
    ; "unprefixed not"
)]
#[test_case(
    "/s-ramp[fn:upper-case(@name)]",
    TranslationError::UnsupportedFunction("fn:upper-case".to_string())
    ; "unknown xpath function"
)]
#[test_case(
    "/s-ramp[s-ramp:classifiedByNoneOf(., 'x')]",
    TranslationError::UnsupportedFunction("s-ramp:classifiedByNoneOf".to_string())
    ; "unknown s-ramp function"
)]
#[test_case(
    "/s-ramp[zz:f(.)]",
    TranslationError::UnresolvedPrefix("zz".to_string())
    ; "undeclared function prefix"
)]
#[test_case(
    "/s-ramp[s-ramp:classifiedByAnyOf(.)]",
    TranslationError::ArgumentCount { function: "s-ramp:classifiedByAnyOf".to_string(), expected: "at least 2".to_string(), actual: 1 }
    ; "classification without classifiers"
)]
#[test_case(
    "/s-ramp[s-ramp:classifiedByAnyOf(., 42)]",
    TranslationError::InvalidClassifier
    ; "numeric classifier"
)]
#[test_case(
    "/s-ramp[fn:matches(@name)]",
    TranslationError::ArgumentCount { function: "fn:matches".to_string(), expected: "2".to_string(), actual: 1 }
    ; "matches with one argument"
)]
#[test_case(
    "/s-ramp[fn:matches('name', 'x')]",
    TranslationError::ExpectedPropertyArgument("fn:matches".to_string())
    ; "matches on a literal"
)]
#[test_case(
    "/s-ramp[fn:matches(@name, 5)]",
    TranslationError::ExpectedStringArgument("fn:matches".to_string())
    ; "matches with numeric pattern"
)]
#[test_case(
    "/s-ramp[fn:not(.)]",
    TranslationError::ExpectedExpressionArgument("fn:not".to_string())
    ; "not of context item"
)]
#[test_case(
    "/s-ramp[@derived > 'true']",
    TranslationError::UnsupportedOperator { op: ">".to_string(), kind: "boolean".to_string(), property: "derived".to_string() }
    ; "ordering on boolean"
)]
#[test_case(
    "/s-ramp[s-ramp:getRelationshipAttribute(., 'k') = 'v']",
    TranslationError::OutsideRelationship("s-ramp:getRelationshipAttribute".to_string())
    ; "relationship attribute outside relationship"
)]
#[test_case(
    "/s-ramp[rel[s-ramp:getTargetAttribute(., 'k')]]",
    TranslationError::ComparisonRequired("s-ramp:getTargetAttribute".to_string())
    ; "target attribute without comparison"
)]
#[test_case(
    "/s-ramp[fn:matches(@name, 'x') = 'y']",
    TranslationError::NotComparable("fn:matches".to_string())
    ; "comparison on matches"
)]
#[test_case(
    "/s-ramp[outer[inner[@name = 'x']]]",
    TranslationError::NestedRelationship
    ; "nested relationship"
)]
#[test_case(
    "/s-ramp/xsd/@name",
    TranslationError::UnsupportedStep("@name".to_string())
    ; "property navigation step"
)]
fn test_translation_errors(input: &str, expected: TranslationError) {
    assert_eq!(translate(input).unwrap_err(), expected);
}
