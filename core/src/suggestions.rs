/// Example questions offered to people who don't know what to ask
pub const SUGGESTIONS: &[&str] = &[
    "How many seasons did Norwich City play in the Premier League?",
    "Which referee has officiated the most Premier League matches?",
    "How many red cards did Mike Dean give in the 2010/11 season?",
    "Who won the most home games in the 2004/05 season?",
    "What was the biggest away win of the 2018/19 season?",
    "How many goals did Arsenal score at home in 2003/04?",
];

/// Zero-based lookup into [`SUGGESTIONS`]
pub fn suggestion(index: usize) -> Option<&'static str> {
    SUGGESTIONS.get(index).copied()
}
