/// Help rows; an empty key marks a category header, both empty a spacer
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "GLOBAL"),
    ("F1 or ?", "Toggle this help"),
    ("q / Ctrl+C", "Quit"),
    ("", ""),
    ("", "PRODUCTS"),
    ("←/→ or h/l", "Previous/next product"),
    ("Tab/Shift+Tab", "Next/previous product"),
    ("1-9", "Jump to product by number"),
    ("", ""),
    ("", "SECTIONS"),
    ("o", "Overview"),
    ("a", "APIs"),
    ("i", "Integration"),
    ("[ / ]", "Previous/next section"),
    ("", ""),
    ("", "SCROLLING"),
    ("j/k/↑/↓", "Scroll line by line"),
    ("Ctrl+D/U", "Half page down/up"),
    ("PageDown/Up", "Half page down/up"),
    ("g/Home", "Jump to top"),
    ("G/End", "Jump to bottom"),
    ("", ""),
    ("", "GLOSSARY"),
    ("Click term", "Open its tooltip"),
    ("Click [x]", "Close the tooltip"),
    ("Esc", "Close the tooltip"),
];

pub const HELP_FOOTER: &str = "Press ? or F1 to close";

#[cfg(test)]
#[path = "help_content_tests.rs"]
mod help_content_tests;
