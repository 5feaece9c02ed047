#![recursion_limit="512"]


// Use `wee_alloc` as the global allocator.
//#[global_allocator]
//static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

use std::rc::Rc;

use client_common::{hash_client::{HashRequestClient, Output, OutputSink}, strength, RpcClient};
use tracing::trace;
use yew::prelude::*;
use yew::services::DialogService;
use yewtil::future::LinkFuture;

/// Base url of the hashing server, fixed at build time.
pub fn server_url() -> &'static str {
    option_env!("ARMOR_SERVER_URL").unwrap_or(common::consts::DEFAULT_SERVER_URL)
}

/// Hands outcomes back to the page, which owns the `output` element.
pub struct PageSink(ComponentLink<PasswordPage>);

impl OutputSink for PageSink {
    fn render(&self, output: Output) {
        self.0.send_message(Msg::Render(output));
    }
}

pub struct PasswordPage {
    link: ComponentLink<Self>,
    client: Rc<HashRequestClient<RpcClient, PageSink>>,
    password: String,
    output: Option<Output>,
}

pub enum Msg {
    UpdatePassword(String),
    Submit,
    Render(Output),
    Submitted,
}

impl PasswordPage {
    fn view_output(&self) -> Html {
        match &self.output {
            None => html!{},
            Some(Output::Hashed(h)) => html!{
                <>
                    <p><strong>{"Entered Password:"}</strong>{" "}{&h.password}</p>
                    <p><strong>{"Generated Salt:"}</strong>{" "}{&h.salt}</p>
                    <p><strong>{"Salted Hash:"}</strong>{" "}{&h.hash}</p>
                </>
            },
            Some(other) => html!{<p>{other.to_string()}</p>},
        }
    }
}

impl Component for PasswordPage {
    type Message = Msg;
    type Properties = ();

    fn create(_: Self::Properties, link: ComponentLink<Self>) -> Self {
        let client = HashRequestClient::new(RpcClient::new(server_url()), PageSink(link.clone()));
        Self {
            link,
            client: Rc::new(client),
            password: String::default(),
            output: None,
        }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        match msg {
            // the gauge is recomputed by view() on every keystroke
            Msg::UpdatePassword(t) => {
                self.password = t;
                true
            }
            Msg::Submit => {
                let client = self.client.clone();
                let password = self.password.clone();
                self.link.send_future(async move {
                    client.submit(&password).await;
                    Msg::Submitted
                });
                false
            }
            Msg::Render(Output::Prompt) => {
                DialogService::alert(&Output::Prompt.to_string());
                false
            }
            Msg::Render(output) => {
                trace!("rendering hash outcome");
                self.output = Some(output);
                true
            }
            Msg::Submitted => false,
        }
    }

    fn change(&mut self, _props: Self::Properties) -> ShouldRender {
        false
    }

    fn view(&self) -> Html {
        let c = strength::evaluate(self.password.as_str());
        html!{
            <div>
                <label for="password">{"password:"}</label>
                <input type="password" id="password" value=self.password.clone() oninput=self.link.callback(|e: InputData| Msg::UpdatePassword(e.value))/>
                <div class="progress">
                    <div id="strengthBar" class=c.bar_class() style=format!("width: {}", c.bar_width())></div>
                </div>
                <span id="strengthText">{c.text()}</span>
                <br/>
                <button onclick=self.link.callback(|_| Msg::Submit)>{"Hash"}</button>
                <div id="output">{self.view_output()}</div>
            </div>
        }
    }
}
