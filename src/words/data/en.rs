//! English dictionary, Latin-1.

use crate::WORD_LEN;

/// Menu title word.
pub const TITLE: &[u8; WORD_LEN] = b"WORDS";

/// Extra characters on the special-character key. English needs none
/// beyond the hyphen.
pub const SPECIAL_CHARS: &[u8] = &[];

/// Words round solutions are drawn from. The daily schedule indexes
/// into this table in order.
pub const ANSWERS: &[[u8; WORD_LEN]] = &[
    *b"WORDS", *b"ABOUT", *b"ABOVE", *b"ACTOR", *b"ADMIT", *b"ADOPT",
    *b"AGENT", *b"AGREE", *b"ALBUM", *b"ALERT", *b"ALIKE", *b"ALIVE",
    *b"ALLOW", *b"ALONE", *b"ALONG", *b"ANGEL", *b"ANGER", *b"ANGLE",
    *b"ANKLE", *b"APPLE", *b"APPLY", *b"ARENA", *b"ARGUE", *b"ARISE",
    *b"ARMOR", *b"AROMA", *b"ASIDE", *b"AUDIO", *b"AVOID", *b"AWAKE",
    *b"AWARD", *b"AWARE", *b"BADGE", *b"BAKER", *b"BASIC", *b"BEACH",
    *b"BEGIN", *b"BENCH", *b"BIRTH", *b"BLACK", *b"BLADE", *b"BLAME",
    *b"BLANK", *b"BLAST", *b"BLAZE", *b"BLEND", *b"BLESS", *b"BLIND",
    *b"BLOCK", *b"BLOOD", *b"BOARD", *b"BONUS", *b"BRAIN", *b"BRAVE",
    *b"BREAD", *b"BREAK", *b"BRICK", *b"BRIDE", *b"BRIEF", *b"BRING",
    *b"BROAD", *b"BROWN", *b"BRUSH", *b"BUILD", *b"BUNCH", *b"BURST",
    *b"CABIN", *b"CABLE", *b"CANDY", *b"CARGO", *b"CARRY", *b"CATCH",
    *b"CAUSE", *b"CHAIN", *b"CHAIR", *b"CHALK", *b"CHARM", *b"CHART",
    *b"CHASE", *b"CHEAP", *b"CHECK", *b"CHESS", *b"CHEST", *b"CHIEF",
    *b"CHILD", *b"CHILL", *b"CHOIR", *b"CLAIM", *b"CLASS", *b"CLEAN",
    *b"CLEAR", *b"CLIMB", *b"CLOCK", *b"CLOSE", *b"CLOUD", *b"COACH",
    *b"COAST", *b"COLOR", *b"COUCH", *b"COUNT", *b"COURT", *b"COVER",
    *b"CRAFT", *b"CRANE", *b"CRASH", *b"CREAM", *b"CRIME", *b"CROWD",
    *b"CROWN", *b"CURVE", *b"DAILY", *b"DAIRY", *b"DANCE", *b"DELAY",
    *b"DELTA", *b"DEPTH", *b"DIARY", *b"DIGIT", *b"DONOR", *b"DOUBT",
    *b"DOZEN", *b"DRAFT", *b"DRAIN", *b"DRAMA", *b"DREAM", *b"DRESS",
    *b"DRIFT", *b"DRILL", *b"DRINK", *b"DRIVE", *b"EAGER", *b"EAGLE",
    *b"EARLY", *b"EARTH", *b"EIGHT", *b"ELBOW", *b"EMPTY", *b"ENJOY",
    *b"ENTER", *b"EQUAL", *b"ERROR", *b"EVENT", *b"EXACT", *b"EXTRA",
    *b"FAITH", *b"FANCY", *b"FAULT", *b"FAVOR", *b"FENCE", *b"FEVER",
    *b"FIELD", *b"FIFTY", *b"FIGHT", *b"FINAL", *b"FLAME", *b"FLASH",
    *b"FLEET", *b"FLOOR", *b"FLOUR", *b"FOCUS", *b"FORCE", *b"FRAME",
    *b"FRESH", *b"FRONT", *b"FRUIT", *b"GHOST", *b"GIANT", *b"GLASS",
    *b"GLOBE", *b"GRACE", *b"GRAIN", *b"GRAND", *b"GRAPE", *b"GRASS",
    *b"GREAT", *b"GREEN", *b"GROUP", *b"GUARD", *b"GUEST", *b"GUIDE",
    *b"HEART", *b"HONEY", *b"HORSE", *b"HOTEL", *b"HOUSE", *b"HUMAN",
    *b"IMAGE", *b"INDEX", *b"IVORY", *b"JUICE", *b"KNIFE", *b"LABEL",
    *b"LARGE", *b"LASER", *b"LAYER", *b"LEARN", *b"LEMON", *b"LEVEL",
    *b"LIGHT", *b"LIMIT", *b"LOCAL", *b"LOGIC", *b"LUNCH", *b"MAGIC",
    *b"MAJOR", *b"MAPLE", *b"MARCH", *b"MATCH", *b"MEDAL", *b"MEDIA",
    *b"METAL", *b"MIGHT", *b"MINOR", *b"MODEL", *b"MONEY", *b"MONTH",
    *b"MORAL", *b"MOTOR", *b"MOUNT", *b"MOUSE", *b"MOUTH", *b"MOVIE",
    *b"MUSIC", *b"NERVE", *b"NIGHT", *b"NOBLE", *b"NOISE", *b"NORTH",
    *b"NOVEL", *b"NURSE", *b"OCEAN", *b"OFFER", *b"OLIVE", *b"ONION",
    *b"ORBIT", *b"ORDER", *b"ORGAN", *b"OTHER", *b"OUNCE", *b"PAINT",
    *b"PANEL", *b"PAPER", *b"PARTY", *b"PEACE", *b"PEARL", *b"PHONE",
    *b"PIANO", *b"PILOT", *b"PITCH", *b"PIZZA", *b"PLACE", *b"PLAIN",
    *b"PLANE", *b"PLANT", *b"PLATE", *b"POINT", *b"POWER", *b"PRESS",
    *b"PRICE", *b"PRIDE", *b"PRIZE", *b"PROOF", *b"PROUD", *b"QUEEN",
    *b"QUICK", *b"QUIET", *b"RADIO", *b"RANGE", *b"RAPID", *b"REACH",
    *b"RIVER", *b"ROBIN", *b"ROUND", *b"ROYAL", *b"SCALE", *b"SCENE",
    *b"SCOPE", *b"SCORE", *b"SENSE", *b"SEVEN", *b"SHADE", *b"SHAPE",
    *b"SHARE", *b"SHARP", *b"SHEEP", *b"SHELF", *b"SHELL", *b"SHINE",
    *b"SHIRT", *b"SHORE", *b"SHORT", *b"SIGHT", *b"SKILL", *b"SLEEP",
    *b"SMALL", *b"SMART", *b"SMILE", *b"SMOKE", *b"SOLAR", *b"SOLID",
    *b"SOUND", *b"SOUTH", *b"SPACE", *b"SPARE", *b"SPARK", *b"SPEAK",
    *b"SPEED", *b"SPICE", *b"SPORT", *b"STAGE", *b"STAIR", *b"STAND",
    *b"START", *b"STEAM", *b"STEEL", *b"STICK", *b"STONE", *b"STORM",
    *b"STORY", *b"STOVE", *b"STYLE", *b"SUGAR", *b"SWEET", *b"TABLE",
    *b"TASTE", *b"TEACH", *b"THEME", *b"TIGER", *b"TITLE", *b"TOAST",
    *b"TODAY", *b"TOKEN", *b"TOPIC", *b"TOTAL", *b"TOUCH", *b"TOWER",
    *b"TRACK", *b"TRADE", *b"TRAIL", *b"TRAIN", *b"TREAT", *b"TREND",
    *b"TRIAL", *b"TRUCK", *b"TRUST", *b"TRUTH", *b"UNCLE", *b"UNION",
    *b"UNITY", *b"URBAN", *b"USUAL", *b"VALUE", *b"VIDEO", *b"VISIT",
    *b"VITAL", *b"VOICE", *b"WAGON", *b"WASTE", *b"WATCH", *b"WATER",
    *b"WHALE", *b"WHEAT", *b"WHEEL", *b"WHITE", *b"WHOLE", *b"WOMAN",
    *b"WORLD", *b"WORRY", *b"WORTH", *b"WOUND", *b"WRIST", *b"WRITE",
    *b"WRONG", *b"YIELD", *b"YOUNG", *b"YOUTH",
];

/// Valid guesses that are never picked as solutions.
pub const ALLOWED: &[[u8; WORD_LEN]] = &[
    *b"SWORD", *b"AROSE", *b"STARE", *b"RAISE", *b"IRATE", *b"TRACE",
    *b"ADIEU", *b"AISLE", *b"ALOFT", *b"AMBER", *b"AMPLE", *b"ANVIL",
    *b"AORTA", *b"APRON", *b"ARBOR", *b"ASHEN", *b"ASKEW", *b"ATLAS",
    *b"ATTIC", *b"AZURE", *b"BAGEL", *b"BANJO", *b"BARGE", *b"BASIL",
    *b"BATON", *b"BAYOU", *b"BEADY", *b"BEIGE", *b"BERET", *b"BISON",
    *b"BLEAK", *b"BLIMP", *b"BLUFF", *b"BONGO", *b"BOOTH", *b"BOUGH",
    *b"BOXER", *b"BRASS", *b"BRAWL", *b"BRISK", *b"BROOK", *b"BROOM",
    *b"BUGGY", *b"BUTTE", *b"CACHE", *b"CACTI", *b"CAIRN", *b"CAMEO",
    *b"CANAL", *b"CANOE", *b"CAPER", *b"CARAT", *b"CEDAR", *b"CELLO",
    *b"CHANT", *b"CHARD", *b"CHIDE", *b"CHIRP", *b"CHORD", *b"CIDER",
    *b"SLATE", *b"STALE",
];
