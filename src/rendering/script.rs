//! Inline client script mirroring `ScrollMonitor` in the browser

use super::sections::{back_to_top, BACK_TO_TOP_ID};
use crate::{Error, Result};

/// Build the script body.
///
/// One `scroll` listener toggles the back-to-top button with the same strict
/// `scrollY > threshold` test; clicking it smooth-scrolls to 0. A button
/// already present in the markup is adopted instead of duplicated.
pub fn scroll_script(threshold: f64) -> Result<String> {
    if !threshold.is_finite() {
        return Err(Error::ConfigError(format!("scroll threshold {} is not finite", threshold)));
    }
    // JSON string literals are valid JS; `</` is split so the markup cannot
    // close the surrounding <script> element.
    let markup = serde_json::to_string(&back_to_top().to_html())?.replace("</", "<\\/");
    let id = serde_json::to_string(BACK_TO_TOP_ID)?;

    Ok(format!(
        r#"(function () {{
  var threshold = {threshold};
  var markup = {markup};
  var button = document.getElementById({id});
  function wire(b) {{
    b.addEventListener("click", function () {{
      window.scrollTo({{ top: 0, behavior: "smooth" }});
    }});
    return b;
  }}
  if (button) {{ wire(button); }}
  function onScroll() {{
    var past = window.scrollY > threshold;
    if (past && !button) {{
      var holder = document.createElement("div");
      holder.innerHTML = markup;
      button = wire(holder.firstElementChild);
      document.body.appendChild(button);
    }} else if (!past && button) {{
      button.remove();
      button = null;
    }}
  }}
  window.addEventListener("scroll", onScroll);
}})();"#,
        threshold = threshold,
        markup = markup,
        id = id,
    ))
}
