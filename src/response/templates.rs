//! Fixed sentences used when the knowledge context has nothing to offer, and
//! the fixed advice blocks appended to context-driven answers.

pub const KHAMMA_GHANI: &str = "Khamma Ghani";

pub const KHAMMA_GHANI_FALLBACK_MEANING: &str = "traditional greeting of hello and respect";

pub const LANGUAGE_FALLBACK: &str = "Udaipur has rich linguistic traditions. The most common respectful greeting is 'Khamma Ghani', which shows cultural awareness and respect for local customs.";

pub const FOOD_LOCATION_DISHES: &str = "Try Dal Baati Churma (traditional Rajasthani dish), Kachori (spiced pastry), and Mirchi Vada (spicy fritters).";

pub const FOOD_FALLBACK: &str = "Udaipur offers amazing local cuisine! Try Dal Baati Churma, Kachori, and local sweets. The old city markets have the most authentic food experiences.";

pub const OFF_PEAK_ADVICE: &str = "For a more peaceful experience, visit between 7-10 AM for fewer crowds and better lighting for photography, or after 8 PM for evening ambiance.";

pub const TRANSPORT_ADVICE: &str = "Narrow roads in the old city can cause congestion for larger vehicles. Parking is limited near major attractions, so two-wheelers or walking is often more convenient.";

pub const SEASON_ADVICE: &str = "Pleasant temperatures (15-25°C) ideal for sightseeing. Expect maximum tourist influx - book accommodations and popular restaurants in advance, and expect peak pricing for hotels, tours, and activities. All outdoor activities are available, and boat rides at the lakes are most popular. Pro tip: Early morning visits (7-10 AM) are essential to avoid crowds. Evening boat rides should be booked in advance.";

pub const TOURISM_FALLBACK: &str = "Tourist congestion in Udaipur is heaviest from 4 PM to 9 PM at major attractions like City Palace and Lake Pichola. Early morning (7-10 AM) and late evening (after 8 PM) are the best times for peaceful visits. Peak season from October to March sees significantly higher crowds throughout the day.";

pub const CULTURE_CLOSING: &str = "When visiting temples and palaces, dress modestly and remove shoes where required. Use traditional greetings like 'Khamma Ghani' to show respect for local customs.";

pub const CULTURE_FALLBACK: &str = "Udaipur has rich cultural traditions. Show respect by dressing modestly near temples, using traditional greetings like 'Khamma Ghani', and being mindful of local customs and religious practices.";

pub const GENERAL_RESPONSE: &str = "I can help you with information about Udaipur's local language and greetings, authentic food recommendations, tourist timing and transportation, or cultural etiquette. Try asking about 'Khamma Ghani', 'best food in Surajpole', 'when to visit City Palace', or 'temple etiquette'.";
