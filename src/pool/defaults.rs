use crate::models::Category;

pub(super) const BUILTIN_ACTIVITIES: &[(Category, &[&str])] = &[
    (
        Category::Education,
        &[
            "Learn a new programming language",
            "Watch a documentary about space",
            "Read a chapter of a non-fiction book",
            "Learn ten words in a foreign language",
            "Take a free online course",
            "Memorize a poem",
            "Research the history of your hometown",
            "Learn to solve a Rubik's cube",
        ],
    ),
    (
        Category::Recreational,
        &[
            "Go for a bike ride",
            "Play a board game",
            "Go on a hike",
            "Fly a kite",
            "Have a picnic in the park",
            "Try geocaching",
            "Build a blanket fort",
            "Visit a museum you've never been to",
        ],
    ),
    (
        Category::Social,
        &[
            "Call a friend you haven't talked to in a while",
            "Host a game night",
            "Write a letter to a family member",
            "Join a local club or meetup",
            "Invite a neighbor over for coffee",
            "Plan a potluck dinner",
            "Start a book club",
        ],
    ),
    (
        Category::Diy,
        &[
            "Build a birdhouse",
            "Knit a scarf",
            "Repaint a piece of old furniture",
            "Make your own candles",
            "Start a small herb garden",
            "Fix something that's been broken for ages",
            "Make a photo collage",
        ],
    ),
    (
        Category::Charity,
        &[
            "Volunteer at a local food bank",
            "Donate clothes you no longer wear",
            "Pick up litter in your neighborhood",
            "Donate blood",
            "Help an elderly neighbor with errands",
            "Foster a pet from an animal shelter",
        ],
    ),
    (
        Category::Cooking,
        &[
            "Bake a loaf of bread from scratch",
            "Cook a dish from a cuisine you've never tried",
            "Make homemade pasta",
            "Try a new smoothie recipe",
            "Make your own pizza",
            "Learn to make sushi",
            "Bake cookies for your neighbors",
        ],
    ),
    (
        Category::Relaxation,
        &[
            "Meditate for fifteen minutes",
            "Take a long bath",
            "Do a yoga session",
            "Read a novel in a cozy spot",
            "Go stargazing",
            "Listen to a podcast while walking",
            "Take a nap without an alarm",
        ],
    ),
    (
        Category::Music,
        &[
            "Learn to play a new song",
            "Make a playlist for a friend",
            "Listen to an album from start to finish",
            "Go to a live concert",
            "Try writing song lyrics",
            "Learn the basics of a new instrument",
            "Have a karaoke night",
        ],
    ),
    (
        Category::Busywork,
        &[
            "Organize your closet",
            "Clean out your email inbox",
            "Sort through old photos",
            "Declutter your desk",
            "Clean your kitchen from top to bottom",
            "Back up your computer files",
            "Plan your meals for the week",
        ],
    ),
];
