//! Command templates run by the host when a donation is not cancelled.
//!
//! A template is a plain command string with `{nickname}`, `{amount}` and
//! `{count}` placeholders, e.g. `give {nickname} diamond {count}`.
//! Rendering only produces the string; executing it is up to the host.

use std::fmt::Write;

use crate::events::DonationEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    Nickname,
    Amount,
    Count,
}

impl Placeholder {
    const ALL: [(Placeholder, &'static str); 3] = [
        (Placeholder::Nickname, "{nickname}"),
        (Placeholder::Amount, "{amount}"),
        (Placeholder::Count, "{count}"),
    ];

    /// Match a placeholder at the start of `input`, returning it with its length.
    fn parse_prefix(input: &str) -> Option<(Placeholder, usize)> {
        Self::ALL
            .into_iter()
            .find(|(_, token)| input.starts_with(*token))
            .map(|(placeholder, token)| (placeholder, token.len()))
    }
}

/// A host-configured command string rendered from a donation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    template: String,
}

impl CommandTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Substitute the event's values into the template.
    ///
    /// Substitution is a single pass, so placeholders appearing inside the
    /// nickname are kept literally. Unknown `{...}` sequences are left as is.
    pub fn render<A>(&self, event: &DonationEvent<A>) -> String {
        let mut out = String::with_capacity(self.template.len() + event.nickname().len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];

            match Placeholder::parse_prefix(tail) {
                Some((placeholder, len)) => {
                    // Writing into a String cannot fail.
                    let _ = match placeholder {
                        Placeholder::Nickname => write!(out, "{}", event.nickname()),
                        Placeholder::Amount => write!(out, "{}", event.amount()),
                        Placeholder::Count => write!(out, "{}", event.count()),
                    };
                    rest = &tail[len..];
                }
                None => {
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        }

        out.push_str(rest);
        out
    }
}

impl From<String> for CommandTemplate {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}

impl From<&str> for CommandTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl std::fmt::Display for CommandTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use donation_sdk::DonationType;

    fn event(donation_type: DonationType, nickname: &str, amount: i64) -> DonationEvent<()> {
        DonationEvent::new((), donation_type, nickname, amount).unwrap()
    }

    #[test]
    fn test_render_all_placeholders() {
        let template = CommandTemplate::new("say {nickname} sent {amount} ({count} units)");
        let rendered = template.render(&event(DonationType::Cheese, "홍길동", 5));
        assert_eq!(rendered, "say 홍길동 sent 5 (500 units)");
    }

    #[test]
    fn test_render_repeated_placeholder() {
        let template = CommandTemplate::from("{count}/{count}");
        assert_eq!(template.render(&event(DonationType::Balloon, "a", 33)), "33/33");
    }

    #[test]
    fn test_unknown_placeholders_are_kept() {
        let template = CommandTemplate::new("tellraw @a {\"text\":\"{nickname}\"} {player} {");
        assert_eq!(
            template.render(&event(DonationType::Balloon, "홍길동", 1)),
            "tellraw @a {\"text\":\"홍길동\"} {player} {"
        );
    }

    #[test]
    fn test_nickname_is_not_expanded_again() {
        let template = CommandTemplate::new("give {nickname} {count}");
        let rendered = template.render(&event(DonationType::Balloon, "{count} }{", 2));
        assert_eq!(rendered, "give {count} }{ 2");
    }

    #[test]
    fn test_template_without_placeholders() {
        let template = CommandTemplate::new("weather clear");
        assert_eq!(template.render(&event(DonationType::Cheese, "TEST", 1)), "weather clear");
        assert_eq!(template.to_string(), "weather clear");
    }
}
