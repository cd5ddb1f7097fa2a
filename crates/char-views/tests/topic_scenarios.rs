//! Topic mapping scenarios over whole aggregates.

use char_core::entities::{
    PointRaw, ProjectAggregate, RawId, RiskFactorRaw, SubtopicRaw, SubtopicSummary, TopicSummary,
};
use char_core::enums::{PointCategory, Topic};
use char_views::models::{SUMMARY_TITLE, TopicData};
use char_views::{map_background, map_insights, map_project_to_topic_data};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn point(id: i64, category: &str) -> PointRaw {
    PointRaw {
        id: Some(RawId::Integer(id)),
        category: Some(category.into()),
        main_idea: Some(format!("idea {id}")),
        explanation: Some(format!("explanation {id}")),
    }
}

fn subtopic(id: i64, topic: &str, title: &str, factors: Vec<RiskFactorRaw>) -> SubtopicRaw {
    SubtopicRaw {
        subtopic_id: Some(RawId::Integer(id)),
        summary: Some(SubtopicSummary {
            topic: Some(topic.into()),
            subtopic: Some(title.into()),
            overall_summary: Some(format!("{title} overall")),
        }),
        risk_factors: factors,
    }
}

fn summary(topic: &str, intro: &str, text: &str) -> TopicSummary {
    TopicSummary {
        topic: Some(topic.into()),
        topic_introduction: Some(intro.into()),
        topic_summary: Some(text.into()),
    }
}

#[rstest]
#[case("carbon-integrity")]
#[case("delivery")]
#[case("environment")]
#[case("policy")]
#[case("social")]
fn empty_aggregate_yields_placeholders_for_every_topic(#[case] key: &str) {
    let aggregate = ProjectAggregate::default();
    let topic = Topic::from_key(key).unwrap();

    let data = map_project_to_topic_data(&aggregate, key);

    assert_eq!(data, TopicData::placeholder(topic));
    assert_eq!(data.summary_title, SUMMARY_TITLE);
    assert!(data.subtopics.is_empty());

    let background = map_background(&aggregate);
    assert_eq!(background.location, "Location not specified");
    assert_eq!(map_insights(&aggregate).total(), 0);
}

#[test]
fn social_impact_scenario() {
    let aggregate = ProjectAggregate {
        project_id: "p-social".into(),
        topic_summaries: vec![summary("Social Impact", "intro", "sum")],
        subtopics: vec![subtopic(
            1,
            "Social Impact",
            "Livelihoods",
            vec![
                RiskFactorRaw {
                    id: Some(RawId::Integer(10)),
                    name: Some("Income".into()),
                    points: vec![
                        point(1, "strengths"),
                        point(2, "strengths"),
                        point(3, "considerations"),
                    ],
                },
                RiskFactorRaw {
                    id: Some(RawId::Integer(11)),
                    name: Some("Land".into()),
                    points: Vec::new(),
                },
            ],
        )],
        ..Default::default()
    };

    let data = map_project_to_topic_data(&aggregate, "social");

    assert_eq!(data.topic_title, "Social Impact");
    assert_eq!(data.topic_description, "intro");
    assert_eq!(data.topic_summary, "sum");
    assert_eq!(data.summary_title, "What you need to know");
    assert_eq!(data.subtopics.len(), 1);

    let factors = &data.subtopics[0].risk_factors;
    assert_eq!(factors.len(), 2);
    assert_eq!(factors[0].kind, PointCategory::Strength);
    assert_eq!(factors[0].points.len(), 3);
    assert_eq!(factors[1].kind, PointCategory::Mixed);
    assert!(factors[1].points.is_empty());
}

#[test]
fn missing_summaries_give_policy_default() {
    let aggregate = ProjectAggregate {
        subtopics: vec![subtopic(1, "Policy & Regulation", "Permits", Vec::new())],
        ..Default::default()
    };

    let data = map_project_to_topic_data(&aggregate, "policy");

    assert_eq!(data.topic_title, "Policy & Regulatory Landscape");
    assert!(data.subtopics.is_empty());
}

#[test]
fn points_keep_order_and_majority_sets_type() {
    let aggregate = ProjectAggregate {
        topic_summaries: vec![summary("Delivery Risk", "intro", "sum")],
        subtopics: vec![subtopic(
            1,
            "Delivery Risk",
            "Offtake",
            vec![RiskFactorRaw {
                id: Some(RawId::Integer(5)),
                name: Some("Buyers".into()),
                points: vec![point(1, "strength"), point(2, "consideration"), point(3, "strength")],
            }],
        )],
        ..Default::default()
    };

    let factor = &map_project_to_topic_data(&aggregate, "delivery").subtopics[0].risk_factors[0];

    assert_eq!(
        factor.points.iter().map(|p| p.text.as_str()).collect::<Vec<_>>(),
        ["explanation 1", "explanation 2", "explanation 3"]
    );
    assert_eq!(
        factor.points.iter().map(|p| p.kind).collect::<Vec<_>>(),
        [
            PointCategory::Strength,
            PointCategory::Consideration,
            PointCategory::Strength
        ]
    );
    assert_eq!(factor.kind, PointCategory::Strength);
}

#[test]
fn three_way_tie_is_mixed_every_time() {
    let aggregate = ProjectAggregate {
        topic_summaries: vec![summary("Environmental Impact", "intro", "sum")],
        subtopics: vec![subtopic(
            1,
            "Environmental Impact",
            "Soils",
            vec![RiskFactorRaw {
                id: Some(RawId::Integer(5)),
                name: Some("Heavy metals".into()),
                points: vec![
                    point(1, "recommended_actions"),
                    point(2, "strengths"),
                    point(3, "considerations"),
                ],
            }],
        )],
        ..Default::default()
    };

    let first = map_project_to_topic_data(&aggregate, "environment");
    for _ in 0..20 {
        let again = map_project_to_topic_data(&aggregate, "environment");
        assert_eq!(again, first);
        assert_eq!(
            again.subtopics[0].risk_factors[0].kind,
            PointCategory::Mixed
        );
    }
}

#[rstest]
#[case("delivery risk")]
#[case("DELIVERY RISK")]
#[case("Delivery Risk")]
#[case("delivery")]
fn summary_lookup_ignores_case(#[case] key: &str) {
    let aggregate = ProjectAggregate {
        topic_summaries: vec![summary("Delivery Risk", "intro", "sum")],
        subtopics: vec![subtopic(1, "DELIVERY RISK", "Offtake", Vec::new())],
        ..Default::default()
    };

    let data = map_project_to_topic_data(&aggregate, key);

    assert_eq!(data.topic_title, "Delivery Risk");
    assert_eq!(data.topic_description, "intro");
    assert_eq!(data.subtopics.len(), 1);
}

#[test]
fn integrity_takes_climate_science_subtopics_only() {
    let aggregate = ProjectAggregate {
        topic_summaries: vec![summary("Carbon Integrity", "intro", "sum")],
        subtopics: vec![
            subtopic(1, "climate science", "Permanence", Vec::new()),
            subtopic(2, "Carbon Integrity", "Mislabelled", Vec::new()),
            subtopic(3, "Delivery Risk", "Offtake", Vec::new()),
            subtopic(4, "Climate Science", "Measurement", Vec::new()),
        ],
        ..Default::default()
    };

    let data = map_project_to_topic_data(&aggregate, "carbon-integrity");

    assert_eq!(
        data.subtopics.iter().map(|s| s.title.as_str()).collect::<Vec<_>>(),
        ["Permanence", "Measurement"]
    );
    assert_eq!(data.subtopics[0].id, "1");
}

#[test]
fn fallback_texts_for_points_and_factors() {
    let aggregate = ProjectAggregate {
        topic_summaries: vec![summary("Social Impact", "intro", "sum")],
        subtopics: vec![subtopic(
            1,
            "Social Impact",
            "Livelihoods",
            vec![RiskFactorRaw {
                id: None,
                name: None,
                points: vec![PointRaw {
                    id: Some(RawId::Integer(1)),
                    category: Some("strengths".into()),
                    main_idea: None,
                    explanation: None,
                }],
            }],
        )],
        ..Default::default()
    };

    let factor = &map_project_to_topic_data(&aggregate, "social").subtopics[0].risk_factors[0];

    assert_eq!(factor.name, "Unnamed Risk Factor");
    assert_eq!(factor.points[0].text, "No details provided");
}

#[test]
fn unsupported_topic_key_is_unavailable() {
    let aggregate = ProjectAggregate {
        topic_summaries: vec![summary("Social Impact", "intro", "sum")],
        ..Default::default()
    };
    assert_eq!(
        map_project_to_topic_data(&aggregate, "biodiversity"),
        TopicData::unavailable()
    );
}

#[test]
fn mistyped_store_fields_map_to_placeholders() {
    let aggregate: ProjectAggregate = serde_json::from_str(
        r#"{
            "project_id": "proj-mixed",
            "project_name": 42,
            "topic_summaries": [
                {"topic": "Social Impact", "topic_introduction": 1, "topic_summary": "sum"}
            ],
            "subtopics": [{
                "subtopic_id": 5,
                "summary": {"topic": "Social Impact", "subtopic": ["Jobs"]},
                "risk_factors": [{
                    "id": 11,
                    "name": 9,
                    "points": [
                        {"id": 1, "category": 3, "main_idea": "a"},
                        {"id": 2, "category": "strengths", "explanation": "kept"}
                    ]
                }]
            }]
        }"#,
    )
    .expect("mistyped fields must not fail the record");

    let data = map_project_to_topic_data(&aggregate, "social");

    assert_eq!(data.topic_title, "Social Impact");
    assert_eq!(
        data.topic_description,
        TopicData::placeholder(Topic::Social).topic_description
    );
    assert_eq!(data.topic_summary, "sum");

    let subtopic = &data.subtopics[0];
    assert_eq!(subtopic.id, "5");
    assert_eq!(subtopic.title, "Unnamed Subtopic");

    let factor = &subtopic.risk_factors[0];
    assert_eq!(factor.name, "Unnamed Risk Factor");
    assert_eq!(
        factor.points.iter().map(|p| (p.text.as_str(), p.kind)).collect::<Vec<_>>(),
        [("a", PointCategory::Mixed), ("kept", PointCategory::Strength)]
    );
    assert_eq!(factor.kind, PointCategory::Mixed);
    assert_eq!(map_background(&aggregate).project_name, "Unnamed Project");
}
