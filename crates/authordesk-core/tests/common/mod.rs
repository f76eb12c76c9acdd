#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use authordesk_core::{AudioError, AudioOutput, LinkOpener, LoopClip};

pub const THREE_ENTRY_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Readings</title>
    <link>https://example.com</link>
    <description>Episodes</description>
    <item>
      <title>Chapter one</title>
      <description>Opening</description>
      <link>https://example.com/1</link>
    </item>
    <item>
      <title>Chapter two</title>
      <description>Middle</description>
      <link>https://example.com/x</link>
    </item>
    <item>
      <title>Chapter three</title>
      <link>https://example.com/3</link>
    </item>
  </channel>
</rss>"#;

/// How the loopback server answers one connection.
pub enum Reply {
    Ok(&'static str),
    Status(u16),
    Hangup,
    Stall(Duration),
}

/// Serves one scripted reply per accepted connection, then exits.
pub struct LoopbackFeed {
    pub url: String,
    handle: Option<JoinHandle<()>>,
}

impl LoopbackFeed {
    pub fn serve(script: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let url = format!("http://{}/feed.xml", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            for reply in script {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                read_request(&mut stream);
                match reply {
                    Reply::Ok(body) => respond(&mut stream, 200, body),
                    Reply::Status(code) => respond(&mut stream, code, "error"),
                    Reply::Hangup => drop(stream),
                    Reply::Stall(duration) => thread::sleep(duration),
                }
            }
        });
        Self {
            url,
            handle: Some(handle),
        }
    }

    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.join().expect("loopback server panicked");
        }
    }
}

fn read_request(stream: &mut TcpStream) {
    let mut request = Vec::new();
    let mut chunk = [0u8; 1024];
    while !request.windows(4).any(|window| window == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(read) => request.extend_from_slice(&chunk[..read]),
        }
    }
}

fn respond(stream: &mut TcpStream, code: u16, body: &str) {
    let response = format!(
        "HTTP/1.1 {code} Scripted\r\nContent-Type: application/rss+xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// A loopback URL nothing listens on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/feed.xml")
}

#[derive(Default)]
pub struct RecordingOpener {
    pub opened: RefCell<Vec<String>>,
}

impl LinkOpener for RecordingOpener {
    fn open(&self, uri: &str) -> anyhow::Result<()> {
        self.opened.borrow_mut().push(uri.to_string());
        Ok(())
    }
}

/// Counts loop starts; playing state is shared so tests can observe it after
/// handing the output to a panel.
#[derive(Clone, Default)]
pub struct CountingOutput {
    pub starts: Arc<std::sync::atomic::AtomicUsize>,
    pub playing: Arc<std::sync::atomic::AtomicBool>,
}

impl AudioOutput for CountingOutput {
    fn play_looped(&mut self, _clip: Arc<LoopClip>) -> Result<(), AudioError> {
        use std::sync::atomic::Ordering;
        self.starts.fetch_add(1, Ordering::SeqCst);
        self.playing.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.playing.load(std::sync::atomic::Ordering::SeqCst)
    }

    fn stop(&mut self) {
        self.playing.store(false, std::sync::atomic::Ordering::SeqCst);
    }
}

pub fn loop_wav_bytes() -> Vec<u8> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loop.wav");
    authordesk_core::audio::write_wav(&path, &authordesk_core::audio::render_default_loop())
        .unwrap();
    std::fs::read(path).unwrap()
}
