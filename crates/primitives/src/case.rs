use heck::{ToSnakeCase, ToTitleCase};

/// Derives a registry key from a type or field name.
///
/// Nested names are dot-separated (`FireworkEffect.Type`); each segment is
/// converted on its own so the outer name becomes a prefix:
///
/// ```
/// use arcana_primitives::snake_key;
///
/// assert_eq!(snake_key("PotionEffectType"), "potion_effect_type");
/// assert_eq!(snake_key("FireworkEffect.Type"), "firework_effect_type");
/// assert_eq!(snake_key("particleCount"), "particle_count");
/// ```
pub fn snake_key(name: &str) -> String {
	name.split('.')
		.filter(|segment| !segment.is_empty())
		.map(|segment| segment.to_snake_case())
		.collect::<Vec<_>>()
		.join("_")
}

/// Default display name for a generated key (`material_list` -> `Material List`).
pub fn display_name(key: &str) -> String {
	key.to_title_case()
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("Vector", "vector")]
	#[case("WandMode", "wand_mode")]
	#[case("SourceLocation.LocationType", "source_location_location_type")]
	#[case("ConfigurationSection", "configuration_section")]
	#[case("iterations", "iterations")]
	#[case("disappearWithOriginEntity", "disappear_with_origin_entity")]
	fn test_snake_key(#[case] name: &str, #[case] expected: &str) {
		assert_eq!(snake_key(name), expected);
	}

	#[rstest]
	#[case("material_list", "Material List")]
	#[case("spell", "Spell")]
	#[case("potion_effect_map", "Potion Effect Map")]
	fn test_display_name(#[case] key: &str, #[case] expected: &str) {
		assert_eq!(display_name(key), expected);
	}
}
