//! Embedded HTML/CSS/JS frontend for the monitor web dashboard.
//!
//! The entire SPA is compiled into the binary as a string constant.
//! No external assets, no build tools, no CDN dependencies. The page polls
//! `/api/snapshot` on the metric cadence and re-renders from the JSON.

/// The complete single-page dashboard HTML.
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>AIDEN ENGINE_MONITOR</title>
<style>
:root {
  --bg: #0d1117;
  --surface: #161b22;
  --border: #30363d;
  --text: #e6edf3;
  --text-muted: #8b949e;
  --accent: #58a6ff;
  --green: #3fb950;
  --yellow: #d29922;
  --red: #f85149;
  --purple: #bc8cff;
  --cyan: #39d2c0;
  --radius: 8px;
  --font: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
  --mono: 'SF Mono', 'Cascadia Code', 'Fira Code', monospace;
}

* { margin: 0; padding: 0; box-sizing: border-box; }
body {
  background: var(--bg);
  color: var(--text);
  font-family: var(--font);
  font-size: 14px;
  line-height: 1.5;
}

.app { max-width: 1200px; margin: 0 auto; padding: 24px; }

header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 24px;
  padding-bottom: 16px;
  border-bottom: 1px solid var(--border);
}
header h1 { font-size: 22px; font-weight: 600; }
header h1 .accent { color: var(--cyan); }
.badge {
  font-family: var(--mono);
  font-size: 11px;
  color: var(--text-muted);
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 2px 8px;
}
.pulse { color: var(--green); font-size: 11px; font-weight: 700; }

.cards {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 16px;
  margin-bottom: 24px;
}
.card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 16px;
}
.card .label {
  font-size: 11px;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-muted);
}
.card .value { font-family: var(--mono); font-size: 26px; font-weight: 700; }
.card .unit { font-size: 12px; color: var(--text-muted); margin-left: 4px; }
.card.input .value { color: var(--cyan); }
.card.output .value { color: var(--accent); }
.card.cost .value { color: var(--green); }
.card.context .value { color: var(--yellow); }

.fillbar {
  margin-top: 8px;
  height: 6px;
  border-radius: 3px;
  background: var(--bg);
  overflow: hidden;
}
.fillbar div { height: 100%; background: var(--yellow); transition: width 1s; }

.row { display: grid; grid-template-columns: 2fr 1fr; gap: 16px; margin-bottom: 24px; }
@media (max-width: 900px) { .row { grid-template-columns: 1fr; } }

.panel {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 16px;
}
.panel h2 {
  font-size: 12px;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-muted);
  margin-bottom: 12px;
}

.chart { display: flex; align-items: flex-end; gap: 2px; height: 140px; }
.chart .bar {
  flex: 1;
  min-width: 3px;
  background: var(--cyan);
  opacity: 0.7;
  border-radius: 2px 2px 0 0;
}

.thoughts { max-height: 300px; overflow-y: auto; font-family: var(--mono); font-size: 12px; }
.thought { padding: 6px 0; border-bottom: 1px solid var(--border); }
.thought .stage { color: var(--purple); font-weight: 700; margin-right: 8px; }
.thought .time { color: var(--text-muted); margin-right: 8px; }
.thought.active { color: var(--cyan); }

.terminal {
  background: #090c10;
  border-radius: var(--radius);
  padding: 12px;
  font-family: var(--mono);
  font-size: 12px;
  max-height: 260px;
  overflow-y: auto;
}
.logline { margin-bottom: 2px; }
.logline .prompt { color: var(--green); opacity: 0.6; margin-right: 6px; }
.logline .tag { color: var(--purple); margin-right: 6px; }
.logline .body { color: var(--text-muted); }

.meta { font-family: var(--mono); font-size: 11px; color: var(--text-muted); }
footer {
  margin-top: 16px;
  text-align: center;
  font-family: var(--mono);
  font-size: 11px;
  color: var(--text-muted);
}
</style>
</head>
<body>
<div class="app">
  <header>
    <div>
      <h1>AIDEN <span class="accent">ENGINE_MONITOR</span></h1>
      <div class="pulse">&#9679; SYSTEM ACTIVE</div>
    </div>
    <div>
      <span class="badge" id="model">MODEL: &mdash;</span>
      <span class="badge" id="session">SESSION: &mdash;</span>
    </div>
  </header>

  <div class="cards">
    <div class="card input">
      <div class="label">Input Tokens</div>
      <div><span class="value" id="input">&mdash;</span><span class="unit">tkns</span></div>
    </div>
    <div class="card output">
      <div class="label">Output Tokens</div>
      <div><span class="value" id="output">&mdash;</span><span class="unit">tkns</span></div>
    </div>
    <div class="card cost">
      <div class="label">Session Cost</div>
      <div><span class="value" id="cost">&mdash;</span><span class="unit">usd</span></div>
    </div>
    <div class="card context">
      <div class="label">Context Fill</div>
      <div><span class="value" id="context">&mdash;</span></div>
      <div class="fillbar"><div id="fillbar" style="width:0%"></div></div>
    </div>
  </div>

  <div class="row">
    <div class="panel">
      <h2>Token Flow</h2>
      <div class="chart" id="chart"></div>
      <div class="meta" id="perf"></div>
    </div>
    <div class="panel">
      <h2>Thought Stream</h2>
      <div class="thoughts" id="thoughts"></div>
    </div>
  </div>

  <div class="panel">
    <h2>AIDEN_CLI_RUNTIME</h2>
    <div class="terminal" id="terminal"></div>
  </div>

  <footer id="footer"></footer>
</div>

<script>
const fmt = n => n.toLocaleString('en-US');

function esc(s) {
  const div = document.createElement('div');
  div.textContent = s;
  return div.innerHTML;
}

function renderChart(series) {
  const chart = document.getElementById('chart');
  chart.innerHTML = '';
  for (const point of series) {
    const bar = document.createElement('div');
    bar.className = 'bar';
    const pct = Math.max(4, Math.min(100, (point.tokens - 30) / 60 * 100));
    bar.style.height = pct + '%';
    bar.title = point.time + ' — ' + point.tokens + ' tk';
    chart.appendChild(bar);
  }
}

function renderThoughts(steps) {
  const el = document.getElementById('thoughts');
  el.innerHTML = steps.map(s =>
    '<div class="thought ' + s.status + '">' +
    '<span class="time">' + esc(s.timestamp) + '</span>' +
    '<span class="stage">' + esc(s.stage) + '</span>' +
    esc(s.content) + '</div>'
  ).join('');
  el.scrollTop = el.scrollHeight;
}

function renderLogs(logs) {
  const el = document.getElementById('terminal');
  el.innerHTML = logs.map(l =>
    '<div class="logline"><span class="prompt">$</span>' +
    '<span class="tag">[' + esc(l.tag) + ']</span>' +
    '<span class="body">' + esc(l.body) + '</span></div>'
  ).join('');
  el.scrollTop = el.scrollHeight;
}

function uptime(secs) {
  const h = Math.floor(secs / 3600), m = Math.floor(secs % 3600 / 60);
  return h > 0 ? h + 'h ' + m + 'm' : m + 'm ' + (secs % 60) + 's';
}

async function refresh() {
  try {
    const resp = await fetch('/api/snapshot');
    if (!resp.ok) return;
    const snap = await resp.json();

    document.getElementById('model').textContent =
      'MODEL: ' + snap.model_name + ' | ' + snap.model_version;
    document.getElementById('session').textContent = 'SESSION: ' + snap.started_at;
    document.getElementById('input').textContent = fmt(snap.tokens.input);
    document.getElementById('output').textContent = fmt(snap.tokens.output);
    document.getElementById('cost').textContent = '$' + snap.tokens.cost.toFixed(2);
    document.getElementById('context').textContent = snap.tokens.context_fill.toFixed(1) + '%';
    document.getElementById('fillbar').style.width = snap.tokens.context_fill + '%';

    const perf = snap.performance;
    document.getElementById('perf').textContent =
      'TTFT ' + perf.ttft_ms + 'ms · TPS ' + perf.tps.toFixed(1) +
      ' · net/think/io ' + perf.latencies.network_ms + '/' +
      perf.latencies.thinking_ms + '/' + perf.latencies.io_ms + 'ms';

    renderChart(snap.time_series);
    renderThoughts(snap.thoughts);
    renderLogs(snap.logs);

    document.getElementById('footer').textContent =
      'UPTIME ' + uptime(snap.uptime_secs) +
      ' | TICKS ' + snap.metric_ticks + 'm / ' + snap.event_ticks + 'e' +
      ' | SELF-HEAL ' + snap.health.self_heal_rate.toFixed(1) + '%' +
      ' | ACTIVE ERRORS ' + snap.health.active_errors;
  } catch (e) {
    // Server gone — keep the last frame and retry.
  }
}

refresh();
setInterval(refresh, 2000);
</script>
</body>
</html>
"##;
