//! Legal values of the enumeration domains the builtin content refers to.

use arcana_registry::EnumSource;

static DOMAINS: &[(&str, &[&str])] = &[
	("Attribute", &[
		"GENERIC_ARMOR",
		"GENERIC_ARMOR_TOUGHNESS",
		"GENERIC_ATTACK_DAMAGE",
		"GENERIC_ATTACK_SPEED",
		"GENERIC_FLYING_SPEED",
		"GENERIC_FOLLOW_RANGE",
		"GENERIC_KNOCKBACK_RESISTANCE",
		"GENERIC_LUCK",
		"GENERIC_MAX_HEALTH",
		"GENERIC_MOVEMENT_SPEED",
	]),
	("Biome", &[
		"BADLANDS",
		"BEACH",
		"BIRCH_FOREST",
		"DARK_FOREST",
		"DESERT",
		"FOREST",
		"JUNGLE",
		"MUSHROOM_FIELDS",
		"NETHER_WASTES",
		"OCEAN",
		"PLAINS",
		"RIVER",
		"SAVANNA",
		"SNOWY_TUNDRA",
		"SWAMP",
		"TAIGA",
		"THE_END",
	]),
	("Effect", &[
		"BLAZE_SHOOT",
		"BOW_FIRE",
		"CLICK1",
		"CLICK2",
		"DOOR_TOGGLE",
		"ENDER_SIGNAL",
		"EXTINGUISH",
		"GHAST_SHOOT",
		"MOBSPAWNER_FLAMES",
		"POTION_BREAK",
		"RECORD_PLAY",
		"SMOKE",
		"STEP_SOUND",
	]),
	("Enchantment", &[
		"ARROW_DAMAGE",
		"ARROW_FIRE",
		"ARROW_INFINITE",
		"DAMAGE_ALL",
		"DIG_SPEED",
		"DURABILITY",
		"FIRE_ASPECT",
		"KNOCKBACK",
		"LOOT_BONUS_BLOCKS",
		"MENDING",
		"PROTECTION_ENVIRONMENTAL",
		"SILK_TOUCH",
	]),
	("EntityType", &[
		"ARMOR_STAND",
		"ARROW",
		"BAT",
		"BLAZE",
		"CAVE_SPIDER",
		"CHICKEN",
		"COW",
		"CREEPER",
		"ENDERMAN",
		"FIREBALL",
		"HORSE",
		"IRON_GOLEM",
		"PIG",
		"PLAYER",
		"SHEEP",
		"SKELETON",
		"SLIME",
		"SPIDER",
		"VILLAGER",
		"WITCH",
		"WOLF",
		"ZOMBIE",
	]),
	("FireworkEffect.Type", &["BALL", "BALL_LARGE", "BURST", "CREEPER", "STAR"]),
	("Material", &[
		"AIR",
		"BEDROCK",
		"COBBLESTONE",
		"DIAMOND_BLOCK",
		"DIRT",
		"GLASS",
		"GLOWSTONE",
		"GOLD_BLOCK",
		"GRASS_BLOCK",
		"GRAVEL",
		"ICE",
		"IRON_BLOCK",
		"LAVA",
		"OAK_LOG",
		"OAK_PLANKS",
		"OBSIDIAN",
		"SAND",
		"SANDSTONE",
		"SNOW_BLOCK",
		"STONE",
		"TNT",
		"TORCH",
		"WATER",
		"WHITE_WOOL",
	]),
	("Particle", &[
		"BLOCK_CRACK",
		"CLOUD",
		"CRIT",
		"CRIT_MAGIC",
		"DRIP_LAVA",
		"DRIP_WATER",
		"ENCHANTMENT_TABLE",
		"END_ROD",
		"EXPLOSION_HUGE",
		"EXPLOSION_LARGE",
		"FIREWORKS_SPARK",
		"FLAME",
		"HEART",
		"LAVA",
		"NOTE",
		"PORTAL",
		"REDSTONE",
		"SMOKE_LARGE",
		"SMOKE_NORMAL",
		"SPELL",
		"SPELL_MOB",
		"SPELL_WITCH",
		"VILLAGER_HAPPY",
	]),
	("PotionEffectType", &[
		"ABSORPTION",
		"BLINDNESS",
		"CONFUSION",
		"DAMAGE_RESISTANCE",
		"FAST_DIGGING",
		"FIRE_RESISTANCE",
		"GLOWING",
		"HEAL",
		"HUNGER",
		"INCREASE_DAMAGE",
		"INVISIBILITY",
		"JUMP",
		"LEVITATION",
		"NIGHT_VISION",
		"POISON",
		"REGENERATION",
		"SLOW",
		"SLOW_DIGGING",
		"SPEED",
		"WATER_BREATHING",
		"WEAKNESS",
		"WITHER",
	]),
	("Sound", &[
		"BLOCK_ANVIL_LAND",
		"BLOCK_FIRE_AMBIENT",
		"BLOCK_GLASS_BREAK",
		"BLOCK_NOTE_BLOCK_PLING",
		"ENTITY_BLAZE_SHOOT",
		"ENTITY_ENDERMAN_TELEPORT",
		"ENTITY_EXPERIENCE_ORB_PICKUP",
		"ENTITY_FIREWORK_ROCKET_BLAST",
		"ENTITY_GENERIC_EXPLODE",
		"ENTITY_LIGHTNING_BOLT_THUNDER",
		"ENTITY_PLAYER_LEVELUP",
		"ENTITY_WITHER_SPAWN",
		"UI_BUTTON_CLICK",
	]),
	("SourceLocation.LocationType", &["BLOCK", "BODY", "EYES", "FEET", "HIT", "SELECTION"]),
	("WandMode", &["CAST", "CHEST", "CYCLE", "INVENTORY", "NONE", "SKILLS"]),
];

/// Enum values known to the builtin content.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumCatalog;

impl EnumCatalog {
	pub fn domains(&self) -> impl Iterator<Item = &'static str> {
		DOMAINS.iter().map(|(domain, _)| *domain)
	}
}

impl EnumSource for EnumCatalog {
	fn variants(&self, domain: &str) -> Option<Vec<String>> {
		DOMAINS
			.iter()
			.find(|(name, _)| *name == domain)
			.map(|(_, values)| values.iter().map(|value| value.to_string()).collect())
	}
}
