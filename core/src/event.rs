//! Input events and the composition chain.
//!
//! An [`Event`] records one unit of user input: a key press, a gesture
//! result, a suggestion pick, a toggle, or "nothing we handle". It says
//! nothing about what text will be produced - that is the combiner's call.
//! A dead key, a partial input, or a press that slid off the key are all
//! events; some of them commit no text at all.
//!
//! Events are immutable. Reinterpretation (dead-key composition, toggle
//! cycling) works by chaining: each hardware-origin event may point at the
//! previous unconsumed event of the same composition sequence through
//! `previous`, forming a most-recent-first singly linked list. Chains are
//! built strictly by prepending onto existing events, so they are finite and
//! acyclic by construction. `previous` is an `Arc` so that producing a
//! consumed copy of an event leaves the history intact for anyone still
//! holding the original.

use std::sync::Arc;

use crate::suggestion::SuggestedWord;

/// Abstract identifier of a physical or virtual key.
///
/// This has conceptually no link to the code point, although keys that enter
/// a straight code point often set both for convenience. Functional keys
/// (backspace, settings, shift) carry a key code and no code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub i32);

/// The kind of input occurrence an [`Event`] records.
///
/// The set is closed: committing text matches over it exhaustively, so a new
/// kind cannot be added without deciding what it commits.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// Input we do not handle, for example Ctrl on a hardware keyboard.
    Unhandled,
    /// A key press that is part of input. It may be part of a sequence that
    /// will be reinterpreted later through combination.
    InputKeypress,
    /// A key that affects the previous character, like a numeric key on a
    /// 10-key layout cycling 1 - a - b - c with repeated presses.
    Toggle,
    /// A key that instructs the combiner to change modes, like hankaku /
    /// zenkaku on a Japanese keyboard.
    ModeKey,
    /// The result of a gesture.
    Gesture,
    /// A manual pick from the suggestion strip. The metadata lives in the
    /// variant, so a suggestion-pick event structurally cannot lack it and
    /// no other kind can carry it.
    SuggestionPicked(SuggestedWord),
    /// A string generated by some software process, like a multi-character
    /// key or a combination that outputs a string.
    SoftwareGeneratedString,
}

/// A property an event can carry in its flag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlag {
    /// A dead character, usually input by a dead key (dead-acute,
    /// dead-abovering, ...).
    Dead,
    /// The event comes from a key repeat, software or hardware.
    Repeat,
    /// The event has already been consumed and must commit no text.
    Consumed,
}

/// The set of [`EventFlag`]s carried by an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventFlags {
    dead: bool,
    repeat: bool,
    consumed: bool,
}

impl EventFlags {
    /// The empty flag set.
    pub fn none() -> Self {
        Self::default()
    }

    /// Return this set with `flag` added.
    pub fn with(mut self, flag: EventFlag) -> Self {
        match flag {
            EventFlag::Dead => self.dead = true,
            EventFlag::Repeat => self.repeat = true,
            EventFlag::Consumed => self.consumed = true,
        }
        self
    }

    /// Membership test.
    pub fn contains(self, flag: EventFlag) -> bool {
        match flag {
            EventFlag::Dead => self.dead,
            EventFlag::Repeat => self.repeat,
            EventFlag::Consumed => self.consumed,
        }
    }
}

/// Where an event originated on screen, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPosition {
    /// A touch press on the software keyboard, with its origin coordinates.
    Touch { x: i32, y: i32 },
    /// No meaningful screen position.
    Unknown,
    /// The press came from an external (hardware) keyboard.
    ExternalKeyboard,
    /// The pick was made on the suggestion strip.
    SuggestionStrip,
}

/// An immutable record of one input occurrence.
///
/// Build events through the factory constructors; the fields are public so
/// the combiner can read them directly and so an embedder that owns a
/// toggle or mode-key layer can construct those kinds literally (this crate
/// defines their committing behavior but not their construction path).
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// What kind of occurrence this is.
    pub kind: EventKind,
    /// The code point associated with the event, if any. This is only
    /// relevant for a keypress; a mode key like ctrl has no code point, and
    /// leaving it `None` avoids unintentional use of a stale value.
    pub code_point: Option<char>,
    /// The string that should be input, for kinds that can emit
    /// multi-character output.
    pub text: Option<String>,
    /// The key that triggered the event, if one did. Not set for gestures.
    pub key_code: Option<KeyCode>,
    /// Screen origin of the event.
    pub position: EventPosition,
    /// Flag set over dead / repeat / consumed.
    pub flags: EventFlags,
    /// The previous event of the same composition sequence, if any.
    pub previous: Option<Arc<Event>>,
}

impl Event {
    /// A key press on the software keyboard, with its touch origin.
    pub fn software_keypress(
        code_point: Option<char>,
        key_code: Option<KeyCode>,
        x: i32,
        y: i32,
        is_repeat: bool,
    ) -> Event {
        Event {
            kind: EventKind::InputKeypress,
            code_point,
            text: None,
            key_code,
            position: EventPosition::Touch { x, y },
            flags: repeat_flags(is_repeat),
            previous: None,
        }
    }

    /// A key press on an external keyboard, chained to the previous
    /// unconsumed event of the sequence being composed.
    pub fn hardware_keypress(
        code_point: Option<char>,
        key_code: Option<KeyCode>,
        previous: Option<Arc<Event>>,
        is_repeat: bool,
    ) -> Event {
        Event {
            kind: EventKind::InputKeypress,
            code_point,
            text: None,
            key_code,
            position: EventPosition::ExternalKeyboard,
            flags: repeat_flags(is_repeat),
            previous,
        }
    }

    /// A dead-character key press. See [`EventFlag::Dead`].
    pub fn dead_keypress(
        code_point: Option<char>,
        key_code: Option<KeyCode>,
        previous: Option<Arc<Event>>,
    ) -> Event {
        Event {
            kind: EventKind::InputKeypress,
            code_point,
            text: None,
            key_code,
            position: EventPosition::ExternalKeyboard,
            flags: EventFlags::none().with(EventFlag::Dead),
            previous,
        }
    }

    /// An event carrying nothing but a code point. This is the most basic
    /// possible input event; it carries none of the context the rest of the
    /// system usually wants, so avoid it unless really nothing is known
    /// about the input.
    pub fn code_point_from_unknown_source(code_point: char) -> Event {
        Event {
            kind: EventKind::InputKeypress,
            code_point: Some(code_point),
            text: None,
            key_code: None,
            position: EventPosition::Unknown,
            flags: EventFlags::none(),
            previous: None,
        }
    }

    /// A code point with known screen coordinates but no key. Used when
    /// resuming composition of previously typed text, where the coordinates
    /// are still known.
    pub fn code_point_from_already_typed_text(code_point: char, x: i32, y: i32) -> Event {
        Event {
            kind: EventKind::InputKeypress,
            code_point: Some(code_point),
            text: None,
            key_code: None,
            position: EventPosition::Touch { x, y },
            flags: EventFlags::none(),
            previous: None,
        }
    }

    /// A manual pick of a suggestion from the suggestion strip.
    pub fn suggestion_picked(info: SuggestedWord) -> Event {
        Event {
            code_point: None,
            text: Some(info.word.clone()),
            kind: EventKind::SuggestionPicked(info),
            key_code: None,
            position: EventPosition::SuggestionStrip,
            flags: EventFlags::none(),
            previous: None,
        }
    }

    /// A manual pick of a punctuation suggestion. Also sets the code point
    /// to the first character of the picked word, so a punctuation pick
    /// behaves like a direct key press for downstream spacing logic.
    ///
    /// # Panics
    ///
    /// Panics if the suggestion's word is empty. That is a defect in the
    /// calling suggestion code, not recoverable input.
    pub fn punctuation_suggestion_picked(info: SuggestedWord) -> Event {
        let code_point = info
            .word
            .chars()
            .next()
            .expect("punctuation suggestion must carry a non-empty word");
        Event {
            code_point: Some(code_point),
            ..Event::suggestion_picked(info)
        }
    }

    /// A string generated by a software process, like a press on a
    /// multi-character key.
    pub fn software_generated_text<T: Into<String>>(text: T, key_code: Option<KeyCode>) -> Event {
        Event {
            kind: EventKind::SoftwareGeneratedString,
            code_point: None,
            text: Some(text.into()),
            key_code,
            position: EventPosition::Unknown,
            flags: EventFlags::none(),
            previous: None,
        }
    }

    /// An event identical to `source` but already consumed. A consumed
    /// event commits no text at all; everything else, including the chain,
    /// is preserved.
    pub fn consumed(source: &Event) -> Event {
        Event {
            flags: source.flags.with(EventFlag::Consumed),
            ..source.clone()
        }
    }

    /// The input produced no effect.
    pub fn not_handled() -> Event {
        Event {
            kind: EventKind::Unhandled,
            code_point: None,
            text: None,
            key_code: None,
            position: EventPosition::Unknown,
            flags: EventFlags::none(),
            previous: None,
        }
    }

    /// Whether this is a function key like backspace, ctrl or settings, as
    /// opposed to a key that results in input.
    pub fn is_functional_key(&self) -> bool {
        self.code_point.is_none()
    }

    /// Whether this event is a dead character. See [`EventFlag::Dead`].
    pub fn is_dead(&self) -> bool {
        self.flags.contains(EventFlag::Dead)
    }

    pub fn is_key_repeat(&self) -> bool {
        self.flags.contains(EventFlag::Repeat)
    }

    pub fn is_consumed(&self) -> bool {
        self.flags.contains(EventFlag::Consumed)
    }

    pub fn is_gesture(&self) -> bool {
        matches!(self.kind, EventKind::Gesture)
    }

    /// Whether this is a fake key press from the suggestion strip, as
    /// happens with punctuation signs picked there.
    pub fn is_suggestion_strip_press(&self) -> bool {
        matches!(self.kind, EventKind::SuggestionPicked(_))
    }

    pub fn is_handled(&self) -> bool {
        !matches!(self.kind, EventKind::Unhandled)
    }

    /// The suggestion metadata, present exactly for suggestion picks.
    pub fn suggestion(&self) -> Option<&SuggestedWord> {
        match &self.kind {
            EventKind::SuggestionPicked(info) => Some(info),
            _ => None,
        }
    }

    /// The text this event contributes to the composed output.
    ///
    /// A consumed event contributes nothing. Mode keys, toggles and
    /// unhandled events never produce text themselves. A keypress
    /// contributes its single code point (nothing when it carries none,
    /// which callers normally rule out via [`Event::is_functional_key`]);
    /// gestures, software-generated strings and suggestion picks contribute
    /// their carried text.
    pub fn text_to_commit(&self) -> String {
        if self.is_consumed() {
            return String::new();
        }
        match &self.kind {
            EventKind::ModeKey | EventKind::Unhandled | EventKind::Toggle => String::new(),
            EventKind::InputKeypress => self.code_point.map(String::from).unwrap_or_default(),
            EventKind::Gesture
            | EventKind::SoftwareGeneratedString
            | EventKind::SuggestionPicked(_) => self.text.clone().unwrap_or_default(),
        }
    }
}

fn repeat_flags(is_repeat: bool) -> EventFlags {
    if is_repeat {
        EventFlags::none().with(EventFlag::Repeat)
    } else {
        EventFlags::none()
    }
}
