//! The one-box chat page.
//!
//! A single static page: one text input, one output area. The browser
//! owns rendering and the request lifecycle; the page just POSTs the
//! prompt to `/api/ask` and shows the reply (or the error status).

/// Static HTML for the chat UI.
pub const PAGE: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Assistente Virtual</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 42rem; margin: 3rem auto; padding: 0 1rem; }
  h1 { font-size: 1.4rem; }
  form { display: flex; gap: 0.5rem; }
  input { flex: 1; padding: 0.5rem; font-size: 1rem; }
  button { padding: 0.5rem 1rem; font-size: 1rem; }
  #resposta { margin-top: 1.5rem; white-space: pre-wrap; }
  .erro { color: #b00020; }
</style>
</head>
<body>
<h1>Assistente Virtual</h1>
<form id="pergunta-form">
  <input id="prompt" type="text" autocomplete="off" autofocus
         placeholder="Faça a sua pergunta...">
  <button type="submit">Enviar</button>
</form>
<div id="resposta"></div>
<script>
  const form = document.getElementById('pergunta-form');
  const input = document.getElementById('prompt');
  const output = document.getElementById('resposta');

  form.addEventListener('submit', async (event) => {
    event.preventDefault();
    const prompt = input.value;
    if (!prompt) return;
    output.textContent = '...';
    output.classList.remove('erro');
    try {
      const response = await fetch('/api/ask', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ prompt }),
      });
      if (!response.ok) throw new Error('HTTP ' + response.status);
      const body = await response.json();
      output.textContent = body.reply;
    } catch (err) {
      output.textContent = 'Falha ao gerar resposta (' + err.message + ')';
      output.classList.add('erro');
    }
  });
</script>
</body>
</html>
"#;
