//! Static log corpora used across harnesses.
//!
//! One corpus per source grammar, each mixing well-formed bounce events
//! with the surrounding traffic a real log carries, plus a pure-noise
//! corpus that must never produce a record under any grammar.

/// Flat mail-log excerpt: three bounces among delivery and daemon noise.
pub const CORPUS_RSYSLOG: &str = "\
Jan  5 10:22:31 mail postfix/smtp[4721]: 7B1F2A: to=<alice@example.com>, relay=mx.example.com[93.184.216.34]:25, status=bounced (connection refused)
Jan  5 10:22:32 mail postfix/smtp[4721]: 7B1F2A: removed
Jan  5 10:23:02 mail postfix/smtp[4722]: 9C3D4E: to=<bob@example.org>, relay=mx.example.org[203.0.113.5]:25, status=sent (250 2.0.0 OK)
Jan  5 11:01:17 mail postfix/smtp[4730]: 1F2E3D: to=<carol@test.net>, relay=mx.test.net[198.51.100.7]:25, status=bounced (mailbox full)
Jan  5 11:05:00 mail dovecot: imap-login: Login: user=<dave>
Jan  6 09:14:45 mail postfix/smtp[4801]: 5A6B7C: to=<erin@invalid.example>, status=bounced (Host or domain name not found)
";

/// Journal excerpt for the postfix unit: two bounces among queue-manager
/// traffic.
pub const CORPUS_JOURNAL: &str = "\
2024-03-02 08:00:00 mail postfix/smtp[9]: 7B1F2A: to=<x@y.org>, relay=none, status=bounced (mailbox full)
2024-03-02 08:00:01 mail postfix/qmgr[3]: 7B1F2A: removed
2024-03-02 08:15:30 mail postfix/smtp[9]: 9C3D4E: to=<ops@example.net>, status=deferred (connection timed out)
2024-03-02 09:45:12 mail postfix/smtp[11]: 1F2E3D: to=<sales@shop.example>, status=bounced (user unknown)
";

/// Mail-queue listing: an active entry, an idle entry, and an entry whose
/// date token does not parse (exercises the now-fallback).
pub const MAILQ_LISTING: &str = "\
A1B2C3* Mon Jan 6 09:00:00 z@w.net
   (Recipient address rejected)
D4E5F6 Tue Jan 7 10:30:00 late@slow.example
   (connect to slow.example[192.0.2.9]:25: Connection timed out)
";

/// A queue entry with a mangled date token; everything else is intact.
pub const MAILQ_MALFORMED_DATE: &str = "\
FFEE99* Mon Xyz 6 09:00:00 broken@clock.example
   (Recipient address rejected)
";

/// Lines that satisfy none of the three grammars.
pub const CORPUS_NOISE: &str = "\
this is not a log line
{\"level\":\"info\",\"msg\":\"wrong format entirely\"}
Jan 5 10:22:31 host postfix/smtp[1]: to=<a@b.com>, status=sent (delivered)
-- Logs begin at Mon 2024-01-01 00:00:00 UTC. --
";
