//! Documentation content for the sramp-query CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Predicates,
    Functions,
    Properties,
    Parameters,
    Translation,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "paths" => Some(Self::Syntax),
            "predicates" | "predicate" | "operators" => Some(Self::Predicates),
            "functions" | "function" | "fn" => Some(Self::Functions),
            "properties" | "property" | "props" => Some(Self::Properties),
            "parameters" | "params" | "param" => Some(Self::Parameters),
            "translation" | "sql" | "jcr_sql2" => Some(Self::Translation),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"SRAMP-QUERY DOCUMENTATION

S-RAMP queries select artifacts from a metadata repository by model and type
and filter them with predicates over properties, relationships and
classifications. Queries are parsed and translated to JCR-SQL2.

DOCUMENTATION CATEGORIES

  syntax            Root, model and type selectors, navigation steps
  predicates        Comparisons, existence tests, and/or, grouping
  functions         Classification, matches, not, relationship attributes
  properties        Reserved properties and how custom properties are stored
  parameters        ? placeholders and the --param TYPE:VALUE syntax
  translation       How queries map onto JCR-SQL2

QUICK REFERENCE

  /s-ramp                          All artifacts
  /s-ramp/xsd                      All artifacts of a model
  /s-ramp/xsd/XsdDocument          One artifact type
  //XsdDocument                    Same, model looked up
  [@name = 'foo']                  Property comparison
  [@prop1]                         Property is set
  [relatedDocument[@name = 'x']]   Relationship with target filter

Run 'sramp-query docs <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_str(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Predicates) => Ok(PREDICATES_DOC),
        Some(DocCategory::Functions) => Ok(FUNCTIONS_DOC),
        Some(DocCategory::Properties) => Ok(PROPERTIES_DOC),
        Some(DocCategory::Parameters) => Ok(PARAMETERS_DOC),
        Some(DocCategory::Translation) => Ok(TRANSLATION_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Selecting Artifacts

ROOT
  /s-ramp
    Every query is absolute and starts at the s-ramp root.

    Constraints:
      - Relative queries (no leading /) are rejected
      - Any root other than s-ramp is rejected

MODEL AND TYPE
  /s-ramp/<model>
  /s-ramp/<model>/<type>
    Narrow the selection to a model (xsd, wsdl, policy, soa, core, ext, ...)
    and optionally one artifact type within it.

    Examples:
      /s-ramp/wsdl
      /s-ramp/wsdl/WsdlDocument
      /s-ramp/ext/MavenPom

TYPE SHORTHAND
  //<type>
    Select a type without naming its model. Types not in the registry are
    treated as extended types.

    Example:
      //XsdDocument              same as /s-ramp/xsd/XsdDocument

NAVIGATION
  <selector>/<relationship>[<predicate>]
    Follow a relationship from the selected artifacts and select the
    targets instead.

    Example:
      /s-ramp/wsdl/WsdlDocument[@name = 'orders']/importedXsds

NAMES
  Names start with a letter or underscore and may contain letters, digits,
  underscores, hyphens and dots (s-ramp, maven.groupId).

COMMENTS
  (: ... :)
    Ignored anywhere whitespace is allowed.
"#;

const PREDICATES_DOC: &str = r#"PREDICATES - Filtering

COMPARISON
  [@property <op> <literal>]
    Operators: =  !=  <  <=  >  >=
    Literals:  'single'  "double"  42  -1.50

    Quotes are escaped by doubling the delimiter: 'it''s'
    The other quote style needs no escape:          "it's"

    Boolean properties (derived) only accept = and !=.

EXISTENCE
  [@property]
    True when the property is set.

RELATIONSHIPS
  [relatedDocument]
    Artifact has at least one relatedDocument relationship.

  [relatedDocument[@name = 'foo']]
    ... whose target is named foo.

    Relationship predicates cannot contain further relationships.

COMBINING
  [a and b]    both
  [a or b]     either
  [(a or b) and c]

    'and' binds tighter than 'or': [a or b and c] means [a or (b and c)].
"#;

const FUNCTIONS_DOC: &str = r#"FUNCTIONS

CLASSIFICATION (s-ramp namespace)
  s-ramp:classifiedByAnyOf(., 'c1', 'c2', ...)
  s-ramp:classifiedByAllOf(., 'c1', 'c2', ...)
    Match artifacts classified by any / all of the classifiers, including
    classifiers implied by the ontology.

  s-ramp:exactlyClassifiedByAnyOf(., 'c1', ...)
  s-ramp:exactlyClassifiedByAllOf(., 'c1', ...)
    Same, but only classifiers applied directly.

  Functions written without a prefix are in the s-ramp namespace.

MATCHES (fn / xp2 namespace)
  fn:matches(@property, 'pattern')
    Pattern match; .* is the only wildcard.

    Example:
      [fn:matches(@name, '.*account.*')]

  fn:matches(., 'text')
    Full-text search.

NOT (fn / xp2 namespace)
  fn:not(<expression>)
    Negate an expression.

    Example:
      [fn:not(@name = 'foo')]

RELATIONSHIP ATTRIBUTES (inside a relationship predicate)
  s-ramp:getRelationshipAttribute(., 'key') <op> <literal>
  s-ramp:getTargetAttribute(., 'key') <op> <literal>
    Compare an "other attribute" of the relationship or of its target.

    Example:
      [importedXsds[s-ramp:getRelationshipAttribute(., 'scope') = 'compile']]
"#;

const PROPERTIES_DOC: &str = r#"PROPERTIES

RESERVED
  createdBy  createdTimestamp  lastModifiedBy  lastModifiedTimestamp
  uuid  name  description  version  derived
  contentType  contentSize  contentHash  contentEncoding
  extendedType  ncName  namespace  targetNamespace
  style  transport  soapLocation

  Reserved properties map to dedicated columns. createdTimestamp and
  lastModifiedTimestamp compare as dates when given 'YYYY-MM-DD' literals.

CUSTOM
  Any other @name is a user-defined property, stored under the
  sramp-properties prefix.

NAMESPACES
  @name and @s-ramp:name are the same property. Properties in any other
  namespace are rejected.

SCHEMA FILE
  --schema <file.toml> replaces parts of the built-in tables:

    custom_property_prefix = "sramp-properties"

    [core_properties.contentSize]
    column = "sramp:contentSize"
    kind = "number"                  (text, number, date, boolean)
"#;

const PARAMETERS_DOC: &str = r#"PARAMETERS

PLACEHOLDERS
  Each ? outside a quoted literal is replaced, in order, by one parameter.
  Supplying more or fewer parameters than placeholders is an error.

    sramp-query translate "/s-ramp/xsd/XsdDocument[@name = ?]" --param s:foo

TYPES
  s:text              'text' (quotes doubled)
  i:42                32-bit integer
  l:123456789012345   64-bit integer
  b:<digits>          arbitrary precision integer
  f:1.5               32-bit float
  d:1.0               64-bit float, rendered as 1.0
  date:2013-02-28     '2013-02-28'
  datetime:<rfc3339>  '2013-02-28T10:11:12Z'
"#;

const TRANSLATION_DOC: &str = r#"TRANSLATION - JCR-SQL2

  SELECT artifact.* FROM [sramp:baseArtifactType] AS artifact WHERE ...

SELECTORS
  /s-ramp                    artifact.[sramp:artifactModel] LIKE '%'
  /s-ramp/xsd                artifact.[sramp:artifactModel] = 'xsd'
  /s-ramp/xsd/XsdDocument    artifact.[sramp:artifactType] = 'XsdDocument'
  /s-ramp/ext/MavenPom       artifact.[sramp:artifactType] IN (...)
                             AND artifact.[sramp:extendedType] = 'MavenPom'

PREDICATES
  Appended as AND (<predicate>). != becomes <>. Existence tests become
  LIKE '%'.

RELATIONSHIPS
  JOIN [sramp:relationship] AS relationshipN ON ISCHILDNODE(relationshipN, artifact)
  Target predicates become a sub-select aliased target.

ORDERING
  --order-by <property> [--descending]
    Only reserved properties can be ordered on; others are ignored.
"#;
