//! The personal, hard-coded copy of the celebration. Content, not logic:
//! everything below is plain data consumed by the page components.

pub(crate) struct Photo {
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub date: &'static str,
}

pub(crate) static PHOTOS: &[Photo] = &[
    Photo {
        src: "/photos/first-laugh.jpg",
        alt: "Laughing together at the kitchen table",
        title: "The day the giggles never stopped",
        date: "14 February 2025",
    },
    Photo {
        src: "/photos/rooftop.jpg",
        alt: "Golden hour on the rooftop",
        title: "Golden hour, golden you",
        date: "23 March 2025",
    },
    Photo {
        src: "/photos/hike.jpg",
        alt: "Hiking the ridge trail",
        title: "Mountain adventures",
        date: "30 November 2024",
    },
    Photo {
        src: "/photos/cafe.jpg",
        alt: "Coffee shop corner booth",
        title: "Official hangout headquarters",
        date: "somewhere in January",
    },
    Photo {
        src: "/photos/festival.jpg",
        alt: "At the lantern festival",
        title: "The most aesthetic picture ever taken",
        date: "about 45 weeks ago",
    },
    Photo {
        src: "/photos/anniversary.jpg",
        alt: "Dressed up for the anniversary dinner",
        title: "You, outshining the chandeliers",
        date: "16 April 2025",
    },
    Photo {
        src: "/photos/picnic.jpg",
        alt: "Picnic blanket in the park",
        title: "First snap you ever sent me",
        date: "7 January 2025",
    },
    Photo {
        src: "/photos/gallery-day.jpg",
        alt: "Wandering the art gallery",
        title: "Still completely out of my league",
        date: "date lost to history",
    },
];

pub(crate) struct MessageEntry {
    pub author: &'static str,
    pub body: &'static str,
    pub date: &'static str,
    pub special: bool,
}

pub(crate) static MESSAGES: &[MessageEntry] = &[
    MessageEntry {
        author: "Your Sunshine",
        body: "Happy birthday to the most adorable person I know! Your kindness, \
               your laughter, and your ridiculous puns light up every room you \
               walk into. I am very glad to have you in my life.",
        date: "Today",
        special: true,
    },
    MessageEntry {
        author: "Milo",
        body: "Wishing you the happiest of birthdays! You deserve everything your \
               heart desires this year, plus unlimited cake. Mostly the cake.",
        date: "Today",
        special: false,
    },
    MessageEntry {
        author: "The Breakfast Club",
        body: "May your year be filled with sour candy, midnight snacks, and every \
               discontinued treat you have ever mourned, you glorious snack goblin.",
        date: "Today",
        special: false,
    },
    MessageEntry {
        author: "Vera",
        body: "Happyyy birthdayyyy!!! May your day overflow with laughter, love, \
               and all the little things that make you smile. You deserve the \
               best today and always. Not crying, you are crying.",
        date: "Today",
        special: false,
    },
    MessageEntry {
        author: "Sam",
        body: "Happy birthday to the owner of the most contagious smile on the \
               planet. Whole city blocks light up when you grin. Science should \
               study you.",
        date: "Today",
        special: false,
    },
    MessageEntry {
        author: "Anonymous",
        body: "You are the spark of this whole friendship and honestly the list of \
               reasons never ends. May every single thing you wished for today \
               find its way to you, sweetpea.",
        date: "Today",
        special: false,
    },
];

pub(crate) static LETTER: &str = "Hey you,\n\n\
Happy birthday, my favorite person.\n\n\
Another year older, another year of you somehow managing to make everything \
lighter, brighter, and much funnier just by being around. If laughter burned \
calories we would both be professional athletes by now.\n\n\
I honestly don't know what I did to deserve a friend like you, but I am \
grateful for it every single day. Your kindness melts people, your smile \
could power a small city, and your friendship means more to me than I will \
ever manage to put into words.\n\n\
As you step into this new year, I hope it hands you the same love, chaos, \
and happiness you hand everyone else. You deserve all the adventures, all \
the surprises, and very possibly unlimited pizza.\n\n\
So here's to you, the beautiful, hilarious, one-of-a-kind soul who makes \
ordinary days feel like celebrations.\n\n\
With all my love (and my worst jokes),\n\
Yours always";

pub(crate) struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub(crate) static FEATURES: &[Feature] = &[
    Feature {
        icon: "📸",
        title: "Beautiful Memories",
        blurb: "A collection of precious moments from over the years",
    },
    Feature {
        icon: "💌",
        title: "Heartfelt Messages",
        blurb: "A few words you probably already know by heart",
    },
    Feature {
        icon: "🎁",
        title: "Special Surprises",
        blurb: "Something magical waiting just for you to discover",
    },
];

pub(crate) static SURPRISE_TEASERS: &[Feature] = &[
    Feature {
        icon: "⏰",
        title: "Countdown",
        blurb: "A special timer with a surprise",
    },
    Feature {
        icon: "🎮",
        title: "Mini Game",
        blurb: "Test your memory skills",
    },
    Feature {
        icon: "💌",
        title: "Secret Letter",
        blurb: "A heartfelt message awaits",
    },
];

pub(crate) static HERO_TITLE: &str = "Happy Birthday";
pub(crate) static HERO_NAME: &str = "Luna!!";
pub(crate) static HERO_SUBTITLE: &str = "Born on the 29th of August, you are truly one of a kind. \
Today is all about celebrating you and the happiness you bring. Wishing you a day as beautiful \
and special as you are.";
