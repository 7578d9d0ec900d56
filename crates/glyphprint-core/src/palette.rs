//! The fixed symbol palette fingerprints are drawn from.
//!
//! Every entry is a single code point with default emoji presentation, so a
//! fingerprint of `n` symbols is exactly `n` chars long.

/// Number of symbols in [`PALETTE`].
pub const PALETTE_SIZE: usize = 256;

/// Ordered, immutable palette. Index space is `[0, PALETTE_SIZE)`.
pub const PALETTE: [&str; PALETTE_SIZE] = [
    // Weather and sky
    "🌀", "🌁", "🌂", "🌃", "🌄", "🌅", "🌆", "🌇",
    "🌈", "🌉", "🌊", "🌋", "🌌", "🌍", "🌎", "🌏",
    "🌐", "🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗",
    "🌘", "🌙", "🌚", "🌛", "🌜", "🌝", "🌞", "🌟",
    "🌠",
    // Plants and food
    "🍀", "🍁", "🍂", "🍃", "🍄", "🍅", "🍆", "🍇",
    "🍈", "🍉", "🍊", "🍋", "🍌", "🍍", "🍎", "🍏",
    "🍐", "🍑", "🍒", "🍓", "🍔", "🍕", "🍖", "🍗",
    "🍘", "🍙", "🍚", "🍛", "🍜", "🍝", "🍞", "🍟",
    "🍠", "🍡", "🍢", "🍣", "🍤", "🍥", "🍦", "🍧",
    "🍨", "🍩", "🍪", "🍫", "🍬", "🍭", "🍮", "🍯",
    "🍰", "🍱", "🍲", "🍳", "🍴", "🍵", "🍶", "🍷",
    "🍸", "🍹", "🍺", "🍻", "🍼",
    // Celebration
    "🎀", "🎁", "🎂", "🎃", "🎄", "🎅", "🎆", "🎇",
    "🎈", "🎉", "🎊", "🎋", "🎌", "🎍", "🎎", "🎏",
    "🎐", "🎑", "🎒", "🎓",
    // Activities and sport
    "🎠", "🎡", "🎢", "🎣", "🎤", "🎥", "🎦", "🎧",
    "🎨", "🎩", "🎪", "🎫", "🎬", "🎭", "🎮", "🎯",
    "🎰", "🎱", "🎲", "🎳", "🎴", "🎵", "🎶", "🎷",
    "🎸", "🎹", "🎺", "🎻", "🎼", "🎽", "🎾", "🎿",
    "🏀", "🏁", "🏂", "🏃", "🏄", "🏅", "🏆", "🏇",
    "🏈", "🏉", "🏊",
    // Buildings
    "🏠", "🏡", "🏢", "🏣",
    // Animals
    "🐀", "🐁", "🐂", "🐃", "🐄", "🐅", "🐆", "🐇",
    "🐈", "🐉", "🐊", "🐋", "🐌", "🐍", "🐎", "🐏",
    "🐐", "🐑", "🐒", "🐓", "🐔", "🐕", "🐖", "🐗",
    "🐘", "🐙", "🐚", "🐛", "🐜", "🐝", "🐞", "🐟",
    "🐠", "🐡", "🐢", "🐣", "🐤", "🐥", "🐦", "🐧",
    "🐨", "🐩", "🐪", "🐫", "🐬", "🐭", "🐮", "🐯",
    "🐰", "🐱", "🐲", "🐳", "🐴", "🐵", "🐶", "🐷",
    "🐸", "🐹", "🐺", "🐻", "🐼", "🐽", "🐾",
    // Transport
    "🚀", "🚁", "🚂", "🚃", "🚄", "🚅", "🚆", "🚇",
    "🚈", "🚉", "🚊", "🚋", "🚌", "🚍", "🚎", "🚏",
    "🚐", "🚑", "🚒", "🚓", "🚔", "🚕", "🚖", "🚗",
    "🚘", "🚙", "🚚", "🚛", "🚜", "🚝", "🚞", "🚟",
];

/// Look up the symbol for a palette index.
///
/// Out-of-range indices wrap, so the lookup never panics.
pub const fn symbol(index: usize) -> &'static str {
    PALETTE[index % PALETTE_SIZE]
}
