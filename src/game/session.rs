//! State machine for a single word
//!
//! A session starts `Playing` as soon as it is built and ends `Won` or `Lost`.
//! Out-of-state or malformed input is ignored and yields no events.

use rand::Rng;
use tracing::debug;

use crate::core::{Difficulty, Feedback, Word, display_letter, is_exact_match, is_latin_letter};

use super::events::{GameEvent, GameStatus};
use super::hints::HintPool;

/// One game: a target word, the submitted guesses and the hint pool
#[derive(Debug, Clone)]
pub struct GameSession {
    word: Word,
    difficulty: Difficulty,
    guesses: Vec<Vec<char>>,
    buffer: Vec<char>,
    hints: HintPool,
    status: GameStatus,
    auto_submit: bool,
}

impl GameSession {
    /// Start a game on `word` with the budgets of `difficulty`
    ///
    /// # Examples
    /// ```
    /// use les_mots::core::{Difficulty, Word, WordId};
    /// use les_mots::game::{GameSession, GameStatus};
    ///
    /// let word = Word::new(WordId(1), "été").unwrap();
    /// let mut session = GameSession::new(word, Difficulty::Hard);
    ///
    /// for letter in "ete".chars() {
    ///     session.append_letter(letter);
    /// }
    /// assert_eq!(session.status(), GameStatus::Won);
    /// ```
    #[must_use]
    pub fn new(word: Word, difficulty: Difficulty) -> Self {
        let hints = HintPool::new(word.hints().to_vec(), difficulty.max_hints());
        Self {
            word,
            difficulty,
            guesses: Vec::new(),
            buffer: Vec::new(),
            hints,
            status: GameStatus::Playing,
            auto_submit: true,
        }
    }

    /// Whether a full row is submitted as soon as its last letter is typed
    #[must_use]
    pub const fn with_auto_submit(mut self, auto_submit: bool) -> Self {
        self.auto_submit = auto_submit;
        self
    }

    /// Reveal the word's first hint; called once right after loading
    pub fn reveal_first_hint(&mut self) -> Vec<GameEvent> {
        if self.status != GameStatus::Playing {
            return Vec::new();
        }
        self.hints
            .reveal_first()
            .cloned()
            .map(|hint| GameEvent::HintRevealed {
                hint,
                remaining: self.hints.remaining(),
            })
            .into_iter()
            .collect()
    }

    /// Reveal a random hint if the budget allows
    pub fn request_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<GameEvent> {
        if self.status != GameStatus::Playing {
            return Vec::new();
        }
        self.hints
            .reveal_random(rng)
            .cloned()
            .map(|hint| GameEvent::HintRevealed {
                hint,
                remaining: self.hints.remaining(),
            })
            .into_iter()
            .collect()
    }

    /// Type a letter into the current row
    ///
    /// Anything but a Latin letter, and letters past the end of the row, are
    /// ignored.
    pub fn append_letter(&mut self, letter: char) -> Vec<GameEvent> {
        if self.status != GameStatus::Playing
            || !is_latin_letter(letter)
            || self.buffer.len() >= self.word.len()
        {
            return Vec::new();
        }

        let letter = display_letter(letter);
        self.buffer.push(letter);
        let mut events = vec![GameEvent::LetterAdded {
            position: self.buffer.len() - 1,
            letter,
        }];

        if self.auto_submit && self.buffer_is_full() {
            events.extend(self.submit_guess());
        }
        events
    }

    /// Erase the last typed letter
    pub fn remove_letter(&mut self) -> Vec<GameEvent> {
        if self.status != GameStatus::Playing || self.buffer.pop().is_none() {
            return Vec::new();
        }
        vec![GameEvent::LetterRemoved {
            position: self.buffer.len(),
        }]
    }

    /// Submit the current row
    ///
    /// Only a full row is accepted. The guess is recorded, evaluated, and the
    /// status moves to `Won` on an accent-insensitive match or to `Lost` once
    /// every attempt is used.
    pub fn submit_guess(&mut self) -> Vec<GameEvent> {
        if self.status != GameStatus::Playing || !self.buffer_is_full() {
            return Vec::new();
        }

        let guess = std::mem::take(&mut self.buffer);
        let row = self.guesses.len();
        let feedback = Feedback::evaluate(&guess, self.word.letters());
        let won = is_exact_match(&guess, self.word.letters());
        self.guesses.push(guess);

        let mut events = vec![GameEvent::GuessEvaluated { row, feedback }];

        if won {
            self.status = GameStatus::Won;
            events.push(GameEvent::Won {
                attempts: self.guesses.len(),
            });
        } else if self.guesses.len() >= self.max_attempts() {
            self.status = GameStatus::Lost;
            events.push(GameEvent::Lost { gave_up: false });
        } else {
            events.push(GameEvent::Missed {
                row,
                attempts_left: self.attempts_left(),
            });
        }

        debug!(row, status = ?self.status, "guess submitted");
        events
    }

    /// Abandon the game; it counts as a loss
    pub fn give_up(&mut self) -> Vec<GameEvent> {
        if self.status != GameStatus::Playing {
            return Vec::new();
        }
        self.status = GameStatus::Lost;
        debug!(attempts = self.guesses.len(), "player gave up");
        vec![GameEvent::Lost { gave_up: true }]
    }

    fn buffer_is_full(&self) -> bool {
        self.buffer.len() == self.word.len()
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Index of the row being typed, i.e. the number of submitted guesses
    #[must_use]
    pub fn attempt(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.difficulty.max_attempts()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.max_attempts().saturating_sub(self.guesses.len())
    }

    /// Letters typed in the current row
    #[must_use]
    pub fn buffer(&self) -> &[char] {
        &self.buffer
    }

    #[must_use]
    pub fn guesses(&self) -> &[Vec<char>] {
        &self.guesses
    }

    /// Submitted rows with their feedback, recomputed from the guesses
    pub fn rows(&self) -> impl Iterator<Item = (&[char], Feedback)> {
        self.guesses.iter().map(|guess| {
            (
                guess.as_slice(),
                Feedback::evaluate(guess, self.word.letters()),
            )
        })
    }

    #[must_use]
    pub const fn hints(&self) -> &HintPool {
        &self.hints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Hint, LetterVerdict, WordId};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(text: &str) -> Word {
        Word::new(WordId(1), text).unwrap().with_hints(vec![
            Hint::new("un", "uno"),
            Hint::new("deux", "dos"),
            Hint::new("trois", "tres"),
            Hint::new("quatre", "cuatro"),
        ])
    }

    fn type_word(session: &mut GameSession, text: &str) -> Vec<GameEvent> {
        text.chars().flat_map(|c| session.append_letter(c)).collect()
    }

    #[test]
    fn full_row_is_submitted_automatically() {
        let mut session = GameSession::new(word("livre"), Difficulty::Normal);
        let events = type_word(&mut session, "libre");

        assert_eq!(session.attempt(), 1);
        assert!(session.buffer().is_empty());
        assert!(events.contains(&GameEvent::Missed {
            row: 0,
            attempts_left: 2
        }));
        assert_eq!(session.status(), GameStatus::Playing);
    }

    #[test]
    fn manual_submit_requires_full_row() {
        let mut session =
            GameSession::new(word("chat"), Difficulty::Normal).with_auto_submit(false);
        type_word(&mut session, "cha");
        assert!(session.submit_guess().is_empty());

        session.append_letter('t');
        assert_eq!(session.buffer().len(), 4);
        let events = session.submit_guess();
        assert_eq!(events.last(), Some(&GameEvent::Won { attempts: 1 }));
    }

    #[test]
    fn extra_letters_and_non_letters_are_ignored() {
        let mut session =
            GameSession::new(word("chat"), Difficulty::Normal).with_auto_submit(false);
        assert!(session.append_letter('1').is_empty());
        assert!(session.append_letter(' ').is_empty());
        type_word(&mut session, "chien");

        assert_eq!(session.buffer(), &['C', 'H', 'I', 'E']);
    }

    #[test]
    fn non_latin_letters_are_ignored() {
        let mut session =
            GameSession::new(word("chat"), Difficulty::Normal).with_auto_submit(false);
        for letter in ['λ', 'Ж', '中'] {
            assert!(session.append_letter(letter).is_empty());
        }
        assert!(session.buffer().is_empty());

        type_word(&mut session, "çé");
        assert_eq!(session.buffer(), &['Ç', 'É']);
    }

    #[test]
    fn letters_are_uppercased_with_accents() {
        let mut session =
            GameSession::new(word("forêt"), Difficulty::Normal).with_auto_submit(false);
        let events = session.append_letter('ê');
        assert_eq!(
            events,
            vec![GameEvent::LetterAdded {
                position: 0,
                letter: 'Ê'
            }]
        );
    }

    #[test]
    fn remove_letter() {
        let mut session = GameSession::new(word("chat"), Difficulty::Normal);
        assert!(session.remove_letter().is_empty());

        type_word(&mut session, "ch");
        assert_eq!(
            session.remove_letter(),
            vec![GameEvent::LetterRemoved { position: 1 }]
        );
        assert_eq!(session.buffer(), &['C']);
    }

    #[test]
    fn accent_insensitive_win() {
        let mut session = GameSession::new(word("été"), Difficulty::Normal);
        let events = type_word(&mut session, "ete");

        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(events.last(), Some(&GameEvent::Won { attempts: 1 }));
    }

    #[test]
    fn hard_loses_after_one_wrong_guess() {
        let mut session = GameSession::new(word("livre"), Difficulty::Hard);
        let events = type_word(&mut session, "libre");

        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(events.last(), Some(&GameEvent::Lost { gave_up: false }));
        assert!(type_word(&mut session, "livre").is_empty());
        assert_eq!(session.guesses().len(), 1);
    }

    #[test]
    fn guess_record_never_exceeds_max_attempts() {
        let mut session = GameSession::new(word("livre"), Difficulty::Normal);
        for guess in ["libre", "lièvre", "vivre", "litre", "lives"] {
            type_word(&mut session, guess);
        }
        assert_eq!(session.guesses().len(), 3);
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.attempts_left(), 0);
    }

    #[test]
    fn give_up_ends_game() {
        let mut session = GameSession::new(word("chat"), Difficulty::Easy);
        assert_eq!(
            session.give_up(),
            vec![GameEvent::Lost { gave_up: true }]
        );
        assert_eq!(session.status(), GameStatus::Lost);
        assert!(session.give_up().is_empty());
    }

    #[test]
    fn hints_respect_budget_and_status() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = GameSession::new(word("chat"), Difficulty::Normal);

        assert_eq!(session.reveal_first_hint().len(), 1);
        assert_eq!(session.hints().revealed()[0], Hint::new("un", "uno"));
        assert_eq!(session.request_hint(&mut rng).len(), 1);
        assert_eq!(session.request_hint(&mut rng).len(), 1);
        assert!(session.request_hint(&mut rng).is_empty());
        assert_eq!(session.hints().remaining(), 0);
        assert_eq!(session.hints().available().len(), 1);

        let mut finished = GameSession::new(word("chat"), Difficulty::Normal);
        finished.give_up();
        assert!(finished.reveal_first_hint().is_empty());
        assert!(finished.request_hint(&mut rng).is_empty());
    }

    #[test]
    fn rows_recompute_feedback() {
        let mut session = GameSession::new(word("porte"), Difficulty::Easy);
        type_word(&mut session, "total");

        let rows: Vec<_> = session.rows().collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, &['T', 'O', 'T', 'A', 'L']);
        assert_eq!(
            rows[0].1.verdicts(),
            &[
                LetterVerdict::Present,
                LetterVerdict::Correct,
                LetterVerdict::Absent,
                LetterVerdict::Absent,
                LetterVerdict::Absent,
            ]
        );
    }
}
