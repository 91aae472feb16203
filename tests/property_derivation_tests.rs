use analysis_lens::api::{
    CategoryFilter, DerivationConfig, PosFilterCriteria, category_counts, filter_tokens,
    group_entities, summarize_entities, word_cloud_layout,
};
use analysis_lens::core::{Entity, KeywordFrequency, PosToken};
use proptest::prelude::*;

const LABELS: [&str; 5] = ["PERSON", "ORG", "GPE", "DATE", "CUSTOM"];
const POS_CODES: [&str; 6] = ["NOUN", "VERB", "ADJ", "DET", "PROPN", "X"];

fn entities_strategy() -> impl Strategy<Value = Vec<Entity>> {
    proptest::collection::vec(("[a-zé ]{1,12}", 0..LABELS.len(), 0usize..500), 0..48).prop_map(
        |raw| {
            raw.into_iter()
                .map(|(text, label, start)| {
                    let end = start + text.chars().count();
                    Entity::new(text, LABELS[label], start, end)
                })
                .collect()
        },
    )
}

fn tokens_strategy() -> impl Strategy<Value = Vec<PosToken>> {
    proptest::collection::vec(("[A-Za-z]{1,8}", 0..POS_CODES.len()), 0..64).prop_map(|raw| {
        raw.into_iter()
            .map(|(token, pos)| PosToken::new(token, POS_CODES[pos], "TAG", "dep"))
            .collect()
    })
}

fn keywords_strategy() -> impl Strategy<Value = Vec<KeywordFrequency>> {
    proptest::collection::vec(1u32..10_000, 1..64).prop_map(|frequencies| {
        frequencies
            .into_iter()
            .enumerate()
            .map(|(index, frequency)| KeywordFrequency::new(format!("w{index}"), frequency))
            .collect()
    })
}

proptest! {
    #[test]
    fn entity_groups_partition_the_input(entities in entities_strategy()) {
        let groups = group_entities(&entities);

        let grouped: usize = groups.values().map(Vec::len).sum();
        prop_assert_eq!(grouped, entities.len());

        for (code, group) in &groups {
            let expected: Vec<&Entity> = entities.iter().filter(|e| &e.label == code).collect();
            let actual: Vec<&Entity> = group.iter().collect();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn entity_average_length_times_count_is_total_length(entities in entities_strategy()) {
        let groups = group_entities(&entities);
        let summary = summarize_entities(&entities, &groups);

        match summary.avg_entity_length {
            None => prop_assert!(entities.is_empty()),
            Some(avg) => {
                let total: usize = entities.iter().map(Entity::text_len).sum();
                prop_assert!((avg * entities.len() as f64 - total as f64).abs() < 1e-6);
            }
        }
        prop_assert!(summary.most_common_type_count <= summary.total);
        prop_assert_eq!(summary.type_count, groups.len());
    }

    #[test]
    fn word_cloud_size_is_bounded_and_monotonic(keywords in keywords_strategy()) {
        let config = DerivationConfig::default();
        let layout = word_cloud_layout(&keywords, &config);
        let max_frequency = keywords.iter().map(|k| k.frequency).max().unwrap_or(0);

        prop_assert_eq!(layout.len(), keywords.len());
        for entry in &layout {
            prop_assert!(entry.size >= config.word_cloud_min_size);
            prop_assert!(entry.size <= config.word_cloud_max_size);
            prop_assert!(entry.opacity >= config.word_cloud_opacity_floor - 1e-12);
            prop_assert!(entry.opacity <= 1.0 + 1e-12);
            prop_assert!((0.0..360.0).contains(&entry.hue));
            if entry.frequency == max_frequency {
                prop_assert_eq!(entry.size, config.word_cloud_max_size);
            }
        }

        for a in &layout {
            for b in &layout {
                if a.frequency <= b.frequency {
                    prop_assert!(a.size <= b.size);
                }
            }
        }
    }

    #[test]
    fn unfiltered_pos_view_is_identity(tokens in tokens_strategy()) {
        let filtered = filter_tokens(&tokens, &PosFilterCriteria::default());
        prop_assert_eq!(filtered, tokens);
    }

    #[test]
    fn pos_filter_is_idempotent(
        tokens in tokens_strategy(),
        search in "[a-zA-Z]{0,3}",
        category in 0..=POS_CODES.len(),
    ) {
        let category = POS_CODES
            .get(category)
            .map_or(CategoryFilter::All, |code| CategoryFilter::Category((*code).to_owned()));
        let criteria = PosFilterCriteria::new(search, category);

        let once = filter_tokens(&tokens, &criteria);
        let twice = filter_tokens(&once, &criteria);
        prop_assert_eq!(&twice, &once);
        prop_assert!(once.len() <= tokens.len());
    }

    #[test]
    fn category_counts_sum_to_stream_length(tokens in tokens_strategy()) {
        let counts = category_counts(&tokens);
        prop_assert_eq!(counts.values().sum::<usize>(), tokens.len());
    }
}
