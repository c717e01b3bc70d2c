use rand::seq::IndexedRandom;
use rand::Rng;

/// Quote pool for the "Quote of the Day" pane
pub const QUOTES: [&str; 10] = [
    "The only way to do great work is to love what you do. - Steve Jobs",
    "It does not matter how slowly you go as long as you do not stop. - Confucius",
    "Success is not final, failure is not fatal: It is the courage to continue that counts. - Winston Churchill",
    "The future belongs to those who believe in the beauty of their dreams. - Eleanor Roosevelt",
    "Don't watch the clock; do what it does. Keep going. - Sam Levenson",
    "The secret of getting ahead is getting started. - Mark Twain",
    "Believe you can and you're halfway there. - Theodore Roosevelt",
    "Your time is limited, don't waste it living someone else's life. - Steve Jobs",
    "It always seems impossible until it's done. - Nelson Mandela",
    "The best way to predict the future is to create it. - Abraham Lincoln",
];

/// Pick a quote uniformly at random
pub fn pick_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // The pool is a non-empty constant, so `choose` always yields a value
    QUOTES.choose(rng).copied().unwrap_or(QUOTES[0])
}
