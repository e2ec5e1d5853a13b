use anyhow::Result;
use headless_chrome::protocol::cdp::types::Event;
use headless_chrome::protocol::cdp::Page as PageDomain;
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .map_err(|e| anyhow::anyhow!("invalid launch options: {e}"))?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;

        // Record dialog messages; answering them happens on the test thread.
        let dialogs = Arc::new(Mutex::new(Vec::new()));
        let sink = dialogs.clone();
        tab.add_event_listener(Arc::new(move |event: &Event| {
            if let Event::PageJavascriptDialogOpening(opening) = event {
                if let Ok(mut seen) = sink.lock() {
                    seen.push(opening.params.message.clone());
                }
            }
        }))?;

        Ok(Page { tab, dialogs })
    }
}

pub struct Page {
    tab: Arc<Tab>,
    dialogs: Arc<Mutex<Vec<String>>>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    pub fn url(&self) -> String {
        self.tab.get_url()
    }

    /// Poll until the tab's URL equals `expected`. Client-side routing
    /// does not trigger a navigation event, so waiting on one won't work.
    pub fn wait_for_url(&self, expected: &str, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if self.url() == expected {
                return Ok(());
            }
            std::thread::sleep(Duration::from_millis(100));
        }
        anyhow::bail!("expected url {expected}, still at {}", self.url())
    }

    /// Wait for a JavaScript dialog, accept it, and return its message.
    pub fn accept_dialog(&self, timeout: Duration) -> Result<String> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            let message = self
                .dialogs
                .lock()
                .map_err(|_| anyhow::anyhow!("dialog log poisoned"))?
                .pop();
            if let Some(message) = message {
                self.tab.call_method(PageDomain::HandleJavaScriptDialog {
                    accept: true,
                    prompt_text: None,
                })?;
                return Ok(message);
            }
            std::thread::sleep(Duration::from_millis(100));
        }
        anyhow::bail!("no dialog opened within {timeout:?}")
    }
}
