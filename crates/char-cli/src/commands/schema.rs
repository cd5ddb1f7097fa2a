use char_core::entities::ProjectAggregate;
use char_views::listing::ProjectListPage;
use char_views::models::TopicData;
use char_views::pages::{OverviewPage, TopicPage};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `charview schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_json(args.type_name)?, flags.format)
}

fn schema_json(type_name: SchemaType) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name {
        SchemaType::Aggregate => schema_for!(ProjectAggregate),
        SchemaType::TopicData => schema_for!(TopicData),
        SchemaType::TopicPage => schema_for!(TopicPage),
        SchemaType::OverviewPage => schema_for!(OverviewPage),
        SchemaType::ProjectList => schema_for!(ProjectListPage),
    };
    Ok(serde_json::to_value(schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_data_schema_names_camel_case_fields() {
        let schema = schema_json(SchemaType::TopicData).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("topicTitle"));
        assert!(properties.contains_key("subtopics"));
    }

    #[test]
    fn every_schema_type_renders() {
        for kind in [
            SchemaType::Aggregate,
            SchemaType::TopicData,
            SchemaType::TopicPage,
            SchemaType::OverviewPage,
            SchemaType::ProjectList,
        ] {
            assert!(schema_json(kind).unwrap().is_object());
        }
    }
}
