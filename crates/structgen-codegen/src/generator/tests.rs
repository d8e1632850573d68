//! Tests for model generation

use super::*;
use crate::CodegenError;
use crate::type_mapper::{TypeCatalog, UNKNOWN_TYPE};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use structgen_core::{ColumnSpec, TableSpec};

const USER_DDL: &str = "CREATE TABLE user (id BIGINT UNSIGNED NOT NULL, name VARCHAR(64), \
                        created_at DATETIME NOT NULL COMMENT 'created time')";

fn without_cruds() -> StructGenerator {
    StructGenerator::new(GenerationConfig::default().with_cruds(false))
}

mod end_to_end_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_table_without_cruds() {
        let model = without_cruds().generate_sql(USER_DDL).unwrap();

        assert_eq!(model.type_name, "User");
        assert_eq!(model.table_name, "user");

        let fields: Vec<(&str, &str)> = model
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.type_name.as_str()))
            .collect();
        assert_eq!(
            fields,
            vec![
                ("ID", "uint64"),
                ("Name", "sql.NullString"),
                ("CreatedAt", "time.Time"),
            ]
        );
        assert_eq!(model.fields[2].comment_text, " // created time");

        let expected = indoc! {"
            type User struct {
            \tID\tuint64\t`gorm:\"column:id\" json:\"id\"`
            \tName\tsql.NullString\t`gorm:\"column:name\" json:\"name\"`
            \tCreatedAt\ttime.Time\t`gorm:\"column:created_at\" json:\"created_at\"` // created time
            }

            func (m *User) TableName() string {
            \treturn \"user\"
            }
        "};
        assert_eq!(model.body_text, expected);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let generator = StructGenerator::default();
        let first = generator.generate_sql(USER_DDL).unwrap();
        let second = generator.generate_sql(USER_DDL).unwrap();
        assert_eq!(first.body_text, second.body_text);

        let config = GenerationConfig::default();
        assert_eq!(
            generate(USER_DDL, &config).unwrap(),
            generate(USER_DDL, &config).unwrap()
        );
    }

    #[test]
    fn test_quoted_identifiers() {
        let model = without_cruds()
            .generate_sql(
                "CREATE TABLE `order_item` (`item_id` INT UNSIGNED NOT NULL, \
                 `unit_price` DECIMAL(10,2))",
            )
            .unwrap();

        assert_eq!(model.type_name, "OrderItem");
        assert_eq!(model.table_name, "order_item");
        assert_eq!(model.fields[0].name, "ItemID");
        assert_eq!(model.fields[0].type_name, "uint");
        assert_eq!(model.fields[0].tag, "`gorm:\"column:item_id\" json:\"item_id\"`");
        assert_eq!(model.fields[1].type_name, "sql.NullFloat64");
        assert!(model.body_text.contains("\treturn \"order_item\"\n"));
    }

    #[test]
    fn test_parse_failure_is_propagated() {
        let err = without_cruds().generate_sql("CREATE TABLE user (").unwrap_err();
        assert!(matches!(err, CodegenError::Parse(_)));
    }
}

mod field_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_type_degrades() {
        let table = TableSpec::new("place")
            .with_column(ColumnSpec::new("id", "INT").not_null())
            .with_column(ColumnSpec::new("location", "GEOMETRY").not_null())
            .with_column(ColumnSpec::new("meta", "JSON"));

        let model = without_cruds().generate(&table).unwrap();
        let types: Vec<&str> = model.fields.iter().map(|f| f.type_name.as_str()).collect();
        assert_eq!(types, vec!["int", UNKNOWN_TYPE, UNKNOWN_TYPE]);
        assert!(model.body_text.contains("\tLocation\tunknown\t"));
    }

    #[test]
    fn test_key_columns_never_generated() {
        let table = TableSpec::new("t")
            .with_column(ColumnSpec::new("a", "int"))
            .with_column(ColumnSpec::new("KEY", "int"))
            .with_column(ColumnSpec::new("b", "int"))
            .with_column(ColumnSpec::new("key", "int"))
            .with_column(ColumnSpec::new("c", "int"));

        let model = without_cruds().generate(&table).unwrap();
        let names: Vec<&str> = model.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_quoted_key_column_is_kept() {
        let table = TableSpec::new("t").with_column(ColumnSpec::new("`key`", "varchar"));
        let model = without_cruds().generate(&table).unwrap();
        assert_eq!(model.fields.len(), 1);
        assert_eq!(model.fields[0].name, "Key");
    }

    #[test]
    fn test_empty_tag_template() {
        let generator = StructGenerator::new(
            GenerationConfig::default()
                .with_cruds(false)
                .with_tag_template(""),
        );
        let field = generator.field(&ColumnSpec::new("name", "varchar").not_null());
        assert_eq!(field.tag, "");
        assert_eq!(field.line(), "\tName\tstring\n");
    }

    #[test]
    fn test_comment_newlines_flattened() {
        let field = without_cruds().field(
            &ColumnSpec::new("note", "text").with_comment("line1\nline2"),
        );
        assert_eq!(field.comment_text, " // line1 line2");
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = TypeCatalog::default().with_override("json", "json.RawMessage", "[]byte");
        let generator = without_cruds().with_catalog(Arc::new(catalog));

        let field = generator.field(&ColumnSpec::new("payload", "JSON").not_null());
        assert_eq!(field.type_name, "json.RawMessage");
    }
}

mod section_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn field(name: &str, type_name: &str) -> GeneratedField {
        GeneratedField {
            name: name.to_string(),
            type_name: type_name.to_string(),
            tag: String::new(),
            comment_text: String::new(),
        }
    }

    #[test]
    fn test_type_block() {
        let mut builder = ModelBuilder::new("Post", "post");
        builder.push_field(field("ID", "int"));
        builder.push_field(field("Title", "string"));

        assert_eq!(
            builder.type_block(),
            "type Post struct {\n\tID\tint\n\tTitle\tstring\n}\n"
        );
    }

    #[test]
    fn test_type_block_without_fields() {
        let builder = ModelBuilder::new("Empty", "empty");
        assert_eq!(builder.type_block(), "type Empty struct {\n}\n");
    }

    #[test]
    fn test_accessor_block() {
        let builder = ModelBuilder::new("Post", "post");
        assert_eq!(
            builder.accessor_block(),
            "func (m *Post) TableName() string {\n\treturn \"post\"\n}\n"
        );
    }

    #[test]
    fn test_accessor_escapes_quotes() {
        let builder = ModelBuilder::new("Odd", "od\"d");
        assert!(builder.accessor_block().contains("return \"od\\\"d\""));
    }

    #[test]
    fn test_crud_block_absent() {
        let builder = ModelBuilder::new("Post", "post");
        assert_eq!(builder.crud_block(), None);
        assert_eq!(builder.sections().len(), 2);
        assert!(builder.render().ends_with("}\n"));
        assert!(!builder.render().ends_with("\n\n"));
    }

    #[test]
    fn test_crud_block_joined_with_blank_lines() {
        let builder = ModelBuilder::new("Post", "post")
            .with_crud_blocks(vec!["func A() {}".to_string(), "func B() {}".to_string()]);
        assert_eq!(
            builder.crud_block(),
            Some("func A() {}\n\nfunc B() {}\n".to_string())
        );
        assert!(builder.render().ends_with("func B() {}\n\n"));
    }
}

mod crud_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_five_blocks_in_fixed_order() {
        let model = StructGenerator::default().generate_sql(USER_DDL).unwrap();
        let text = &model.body_text;

        let accessor = text.find("TableName()").unwrap();
        let positions: Vec<usize> = ["CreateUser(", "GetUser(", "ListUser(", "UpdateUser(", "DeleteUser("]
            .iter()
            .map(|name| text.find(name).unwrap())
            .collect();

        assert!(accessor < positions[0]);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(text.matches("\nfunc ").count(), 6);
    }

    #[test]
    fn test_crud_output_ends_with_blank_line() {
        let model = StructGenerator::default().generate_sql(USER_DDL).unwrap();
        assert!(model.body_text.ends_with("}\n\n"));
        assert!(!model.body_text.ends_with("}\n\n\n"));
    }

    #[test]
    fn test_cruds_use_model_name_only() {
        let a = StructGenerator::default()
            .generate_sql("CREATE TABLE user (id INT NOT NULL)")
            .unwrap();
        let b = StructGenerator::default()
            .generate_sql("CREATE TABLE user (id INT NOT NULL, email VARCHAR(255))")
            .unwrap();

        let crud_a = &a.body_text[a.body_text.find("func CreateUser").unwrap()..];
        let crud_b = &b.body_text[b.body_text.find("func CreateUser").unwrap()..];
        assert_eq!(crud_a, crud_b);
    }
}

mod serialization_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_model_serializes_to_json() {
        let model = without_cruds().generate_sql(USER_DDL).unwrap();
        let json = serde_json::to_value(&model).unwrap();

        assert_eq!(json["type_name"], "User");
        assert_eq!(json["table_name"], "user");
        assert_eq!(json["fields"][0]["name"], "ID");
        assert_eq!(json["fields"][2]["comment_text"], " // created time");
        assert_eq!(json["body_text"], model.body_text.as_str());
    }

    #[test]
    fn test_config_defaults_from_partial_json() {
        let config: GenerationConfig =
            serde_json::from_str(r#"{ "include_cruds": false }"#).unwrap();
        assert_eq!(config.tag_template, DEFAULT_TAG_TEMPLATE);
        assert!(!config.include_cruds);
    }

    #[test]
    fn test_display_is_body_text() {
        let model = without_cruds().generate_sql(USER_DDL).unwrap();
        assert_eq!(model.to_string(), model.body_text);
    }
}
