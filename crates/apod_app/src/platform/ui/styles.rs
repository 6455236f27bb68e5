pub const GALLERY_STYLES: &str = r#"
* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: "Helvetica Neue", Arial, sans-serif;
    background: #0b0d17;
    color: #e8eaf6;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 24px;
}

.site-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 16px;
    margin-bottom: 20px;
}

.site-header h1 { margin: 0; font-size: 1.8rem; }

.fetch-button {
    padding: 10px 18px;
    border: 0;
    border-radius: 6px;
    background: #0b3d91;
    color: #fff;
    font-size: 1rem;
    cursor: pointer;
}

.fetch-button:hover, .fetch-button:focus { background: #1458c8; }

.random-fact {
    margin-bottom: 20px;
    padding: 12px 16px;
    border-left: 4px solid #fc3d21;
    background: #141a33;
}

.random-fact p { margin: 0; }

.gallery .placeholder {
    padding: 60px 0;
    text-align: center;
    color: #9fa8da;
}

.cards {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
    gap: 20px;
}

.card {
    background: #141a33;
    border-radius: 8px;
    overflow: hidden;
    cursor: pointer;
    transition: transform 0.15s ease;
}

.card:hover, .card:focus {
    transform: translateY(-3px);
    outline: 2px solid #1458c8;
}

.card .media {
    position: relative;
    height: 200px;
    background: #000;
}

.card img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    display: block;
}

.video-thumb-wrap { position: relative; height: 100%; }

.play-overlay {
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    width: 56px;
    height: 56px;
    border-radius: 50%;
    background: rgba(0, 0, 0, 0.6);
    color: #fff;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.4rem;
    pointer-events: none;
}

.play-overlay.small { width: 40px; height: 40px; font-size: 1rem; }

.no-media {
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    color: #9fa8da;
}

.no-media-text { margin-top: 64px; }

.card-body { padding: 12px 14px; }
.card-title { margin: 0 0 6px; font-size: 1.05rem; }
.card-date { color: #9fa8da; }

.modal { display: none; }

.modal.open {
    display: block;
    position: fixed;
    inset: 0;
    z-index: 100;
}

.modal-backdrop {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.75);
}

.modal-dialog {
    position: relative;
    max-width: 900px;
    max-height: 90vh;
    margin: 5vh auto;
    padding: 20px;
    overflow-y: auto;
    background: #141a33;
    border-radius: 8px;
    outline: none;
}

.modal-close {
    position: absolute;
    top: 8px;
    right: 12px;
    border: 0;
    background: transparent;
    color: #e8eaf6;
    font-size: 1.8rem;
    cursor: pointer;
}

.modal-media img { width: 100%; height: auto; display: block; }
.modal-media iframe { max-width: 100%; border: 0; }
.video-embed-wrap { display: flex; justify-content: center; }
.embed-fallback, .video-link { display: inline-block; margin-top: 8px; color: #82b1ff; }
.modal-date { color: #9fa8da; }
.modal-explanation { line-height: 1.5; }
"#;
