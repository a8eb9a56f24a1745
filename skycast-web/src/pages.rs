//! HTML rendering for the weather search page.
//!
//! The page is small enough that string assembly beats pulling in a
//! template engine. User-supplied values are escaped before insertion.

use skycast_core::WeatherReport;

/// Render the search page, optionally with a result card or error message.
pub fn render_index(weather: Option<&WeatherReport>, error: Option<&str>) -> String {
    let mut body = String::new();

    if let Some(report) = weather {
        body.push_str(&render_weather_card(report));
    }

    if let Some(message) = error {
        body.push_str(&format!(
            r#"<p class="error">{}</p>"#,
            escape(message)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Skycast</title>
  <style>
    body {{ font-family: system-ui, sans-serif; max-width: 32rem; margin: 3rem auto; padding: 0 1rem; }}
    form {{ display: flex; gap: 0.5rem; position: relative; }}
    input[name=city] {{ flex: 1; padding: 0.5rem; font-size: 1rem; }}
    button {{ padding: 0.5rem 1rem; font-size: 1rem; }}
    .card {{ border: 1px solid #ccc; border-radius: 8px; padding: 1rem; margin-top: 1.5rem; }}
    .card h2 {{ margin-top: 0; }}
    .temp {{ font-size: 2.5rem; font-weight: bold; }}
    .error {{ color: #b00020; margin-top: 1.5rem; }}
    .mock-notice {{ color: #666; font-size: 0.85rem; }}
    #suggestions {{ position: absolute; top: 100%; left: 0; right: 0; background: #fff;
                    border: 1px solid #ccc; list-style: none; margin: 0; padding: 0; z-index: 1; }}
    #suggestions li {{ padding: 0.4rem 0.6rem; cursor: pointer; }}
    #suggestions li:hover {{ background: #eee; }}
  </style>
</head>
<body>
  <h1>Skycast</h1>
  <form method="post" action="/" autocomplete="off">
    <input name="city" id="city" placeholder="Enter a city name" required>
    <button type="submit">Search</button>
    <ul id="suggestions" hidden></ul>
  </form>
{body}
  <script>
    const input = document.getElementById('city');
    const list = document.getElementById('suggestions');
    input.addEventListener('input', async () => {{
      const q = input.value.trim();
      if (!q) {{ list.hidden = true; return; }}
      const res = await fetch('/city-suggestions?q=' + encodeURIComponent(q));
      const data = await res.json();
      if (!Array.isArray(data) || data.length === 0) {{ list.hidden = true; return; }}
      list.innerHTML = '';
      for (const city of data) {{
        const li = document.createElement('li');
        li.textContent = city;
        li.onclick = () => {{ input.value = city.split(',')[0]; list.hidden = true; }};
        list.appendChild(li);
      }}
      list.hidden = false;
    }});
    document.addEventListener('click', (e) => {{
      if (e.target !== input) list.hidden = true;
    }});
  </script>
</body>
</html>
"#
    )
}

fn render_weather_card(report: &WeatherReport) -> String {
    let mock_notice = if report.is_mock {
        r#"<p class="mock-notice">Demo data &mdash; set OPENWEATHER_API_KEY for live conditions.</p>"#
    } else {
        ""
    };

    format!(
        r#"  <div class="card">
    <h2>{city}, {country}</h2>
    <img src="https://openweathermap.org/img/wn/{icon}@2x.png" alt="{description}" width="100" height="100">
    <div class="temp">{temperature}&deg;C</div>
    <p>{description}</p>
    <p>Feels like {feels_like}&deg;C &middot; Humidity {humidity}% &middot; Wind {wind_speed} m/s</p>
    {mock_notice}
  </div>
"#,
        city = escape(&report.city),
        country = escape(&report.country),
        icon = escape(&report.icon),
        description = escape(&report.description),
        temperature = report.temperature,
        feels_like = report.feels_like,
        humidity = report.humidity,
        wind_speed = report.wind_speed,
    )
}

/// Minimal HTML entity escaping for text and attribute positions.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
